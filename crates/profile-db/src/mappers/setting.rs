//! Setting entity <-> model mapper

use profile_core::entities::Setting;

use crate::models::SettingModel;

impl From<SettingModel> for Setting {
    fn from(model: SettingModel) -> Self {
        Setting {
            key: model.key,
            value: model.value,
        }
    }
}
