//! Introduction entity <-> model mapper

use profile_core::entities::Introduction;
use profile_core::value_objects::Snowflake;

use crate::models::IntroductionModel;

/// Convert IntroductionModel to Introduction entity
impl From<IntroductionModel> for Introduction {
    fn from(model: IntroductionModel) -> Self {
        Introduction {
            user_id: Snowflake::new(model.user_id),
            channel_id: Snowflake::new(model.channel_id),
            message_id: Snowflake::new(model.message_id),
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_row_without_timestamp() {
        let intro = Introduction::from(IntroductionModel {
            user_id: 1,
            channel_id: 2,
            message_id: 3,
            created_at: None,
        });
        assert_eq!(intro.user_id, Snowflake::new(1));
        assert_eq!(intro.message_id, Snowflake::new(3));
        assert!(intro.created_at.is_none());
    }
}
