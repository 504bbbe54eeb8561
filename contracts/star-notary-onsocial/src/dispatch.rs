use crate::*;
use near_sdk::serde_json::json;

impl Contract {
    pub(crate) fn dispatch_action(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, NotaryError> {
        match action {
            Action::CreateAsset { asset_id, name } => {
                let asset_id = self.create_asset(actor_id, asset_id, name)?;
                Ok(json!(asset_id))
            }
            Action::ListForSale { asset_id, price } => {
                self.list_for_sale(actor_id, asset_id, price)?;
                Ok(Value::Null)
            }
            Action::Buy { asset_id } => {
                let payment = core::mem::take(&mut self.pending_attached_balance);
                let settlement = self.buy(actor_id, asset_id, payment)?;
                Ok(json!(settlement))
            }
            Action::Exchange { asset_a, asset_b } => {
                self.exchange(actor_id, asset_a, asset_b)?;
                Ok(Value::Null)
            }
            Action::Transfer {
                receiver_id,
                asset_id,
            } => {
                self.transfer(actor_id, &receiver_id, asset_id)?;
                Ok(Value::Null)
            }
        }
    }
}
