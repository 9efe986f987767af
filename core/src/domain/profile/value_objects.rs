use uuid::Uuid;

use crate::domain::profile::entities::ProfileType;

pub struct CreateProfileInput {
    pub profile_type: ProfileType,
    pub name: String,
    pub rules: String,
}

pub struct UpdateProfileInput {
    pub profile_type: ProfileType,
    pub profile_id: Uuid,
    pub name: Option<String>,
    pub rules: Option<String>,
}

pub struct GetProfileInput {
    pub profile_type: ProfileType,
    pub profile_id: Uuid,
}

pub struct DeleteProfileInput {
    pub profile_type: ProfileType,
    pub profile_id: Uuid,
}
