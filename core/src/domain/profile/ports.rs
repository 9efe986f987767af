use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::{Profile, ProfileType},
        value_objects::{
            CreateProfileInput, DeleteProfileInput, GetProfileInput, UpdateProfileInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileService: Send + Sync {
    fn get_profiles(
        &self,
        profile_type: ProfileType,
    ) -> impl Future<Output = Result<Vec<Profile>, CoreError>> + Send;

    fn get_profile(
        &self,
        input: GetProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn create_profile(
        &self,
        input: CreateProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn delete_profile(
        &self,
        input: DeleteProfileInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn fetch_profiles(
        &self,
        profile_type: ProfileType,
    ) -> impl Future<Output = Result<Vec<Profile>, CoreError>> + Send;

    fn get_profile_by_id(
        &self,
        profile_type: ProfileType,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, CoreError>> + Send;

    fn create_profile(
        &self,
        profile: Profile,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    /// Applies the given fields to the stored profile in one locked read-modify-write.
    fn update_profile(
        &self,
        input: UpdateProfileInput,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    /// Removes the profile. Menus referencing it are left untouched.
    fn delete_profile(
        &self,
        profile_type: ProfileType,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
