//! BumpCount entity <-> model mapper

use profile_core::entities::BumpCount;
use profile_core::value_objects::Snowflake;

use crate::models::BumpModel;

/// Convert BumpModel to BumpCount entity
impl From<BumpModel> for BumpCount {
    fn from(model: BumpModel) -> Self {
        BumpCount::new(Snowflake::new(model.user_id), model.bump_count)
    }
}
