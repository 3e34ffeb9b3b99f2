//! # Share Form
//!
//! The two-step "share availability" flow: pick a post type, then fill in
//! dogs, schedule, details and location before publishing.
//!
//! Address verification and submission are the only asynchronous steps.
//! Each is split into a `begin_*` call that validates and raises a busy
//! flag and a `complete_*` call that records the outcome and lowers it, so a
//! second attempt while one is in flight is rejected rather than queued.
//! Failures are stored in [`ShareForm::error`] for inline display.

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    errors::{ShareError, ShareResult},
    grid::AvailabilityGrid,
    models::{
        location::{Address, LocationChoice, VerifiedLocation},
        post::{
            CreateAvailabilityResponse, NewAvailabilityPost, OwnerProfile, PostDetails, PostType,
            check_dog_selection,
        },
    },
    services::{AvailabilityStore, GeocodeMatch, Geocoder, resolve_lookup},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ChoosePostType,
    Details,
}

#[derive(Debug, Clone)]
pub struct ShareForm {
    profile: OwnerProfile,
    step: Step,
    post_type: Option<PostType>,
    selected_dogs: Vec<Uuid>,
    details: PostDetails,
    use_profile_location: bool,
    address: Address,
    verified: Option<VerifiedLocation>,
    grid: AvailabilityGrid,
    verifying: bool,
    submitting: bool,
    error: Option<String>,
}

impl ShareForm {
    pub fn new(profile: OwnerProfile) -> Self {
        Self {
            profile,
            step: Step::ChoosePostType,
            post_type: None,
            selected_dogs: Vec::new(),
            details: PostDetails::default(),
            use_profile_location: true,
            address: Address::default(),
            verified: None,
            grid: AvailabilityGrid::new(),
            verifying: false,
            submitting: false,
            error: None,
        }
    }

    pub fn profile(&self) -> &OwnerProfile {
        &self.profile
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn post_type(&self) -> Option<PostType> {
        self.post_type
    }

    pub fn selected_dogs(&self) -> &[Uuid] {
        &self.selected_dogs
    }

    pub fn details(&self) -> &PostDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut PostDetails {
        &mut self.details
    }

    pub fn grid(&self) -> &AvailabilityGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut AvailabilityGrid {
        &mut self.grid
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn verified_location(&self) -> Option<&VerifiedLocation> {
        self.verified.as_ref()
    }

    pub fn uses_profile_location(&self) -> bool {
        self.use_profile_location
    }

    pub fn is_verifying(&self) -> bool {
        self.verifying
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Inline error message, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn fail(&mut self, err: ShareError) -> ShareError {
        self.error = Some(err.user_message());
        err
    }

    /// Chooses what kind of post this is and moves on to the details step.
    ///
    /// A dog post needs at least one dog on the profile; otherwise the form
    /// stays on the first step with an inline error.
    pub fn select_post_type(&mut self, post_type: PostType) -> ShareResult<()> {
        self.post_type = Some(post_type);

        if post_type == PostType::DogAvailable && self.profile.dogs.is_empty() {
            return Err(self.fail(ShareError::Validation(
                "You need to add a dog to your profile before sharing dog availability."
                    .to_string(),
            )));
        }

        self.error = None;
        self.step = Step::Details;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = Step::ChoosePostType;
    }

    /// Adds or removes a dog, keeping the order in which dogs were picked.
    pub fn toggle_dog(&mut self, dog_id: Uuid) -> ShareResult<()> {
        if !self.profile.dogs.iter().any(|dog| dog.id == dog_id) {
            return Err(ShareError::NotFound(format!(
                "Dog with ID {} is not on this profile",
                dog_id
            )));
        }

        match self.selected_dogs.iter().position(|id| *id == dog_id) {
            Some(index) => {
                self.selected_dogs.remove(index);
            }
            None => self.selected_dogs.push(dog_id),
        }
        Ok(())
    }

    pub fn set_use_profile_location(&mut self, use_profile: bool) {
        self.use_profile_location = use_profile;
        self.verified = None;
    }

    /// Replaces the custom address. Any previous verification is discarded.
    pub fn set_address(&mut self, address: Address) {
        self.address = address;
        self.verified = None;
    }

    /// Validates the custom address and marks verification as in flight.
    /// Returns the query to send to the geocoder.
    pub fn begin_address_verification(&mut self) -> ShareResult<String> {
        if self.verifying {
            return Err(ShareError::Busy(
                "Address verification is already in progress".to_string(),
            ));
        }
        if !self.address.is_complete() {
            return Err(self.fail(ShareError::Validation(
                "Please fill in all address fields".to_string(),
            )));
        }

        self.verifying = true;
        Ok(self.address.search_query())
    }

    /// Records the geocoder's answer and clears the in-flight flag.
    pub fn complete_address_verification(
        &mut self,
        outcome: ShareResult<Option<GeocodeMatch>>,
    ) -> ShareResult<VerifiedLocation> {
        self.verifying = false;

        match resolve_lookup(outcome) {
            Ok(verified) => {
                if !verified.city.is_empty() {
                    self.address.city = verified.city.clone();
                }
                if !verified.state.is_empty() {
                    self.address.state = verified.state.clone();
                }
                self.verified = Some(verified.clone());
                self.error = None;
                Ok(verified)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn verify_custom_address<G>(&mut self, geocoder: &G) -> ShareResult<VerifiedLocation>
    where
        G: Geocoder + ?Sized,
    {
        let query = self.begin_address_verification()?;
        let outcome = geocoder.search(&query).await;
        self.complete_address_verification(outcome)
    }

    pub fn location_choice(&self) -> LocationChoice {
        if self.use_profile_location {
            LocationChoice::Profile {
                display_lat: self.profile.display_lat,
                display_lng: self.profile.display_lng,
                city: self.profile.city.clone(),
            }
        } else {
            LocationChoice::Custom {
                address: self.address.clone(),
                verified: self.verified.clone(),
            }
        }
    }

    /// Validates everything and builds the insert record from the saved
    /// schedule, marking submission as in flight.
    ///
    /// Checks run in order: post type, dog selection, saved schedule, then
    /// the schedule and location rules of [`NewAvailabilityPost::build`].
    pub fn begin_submit(&mut self) -> ShareResult<NewAvailabilityPost> {
        if self.submitting {
            return Err(ShareError::Busy(
                "Availability post is already being submitted".to_string(),
            ));
        }

        let Some(post_type) = self.post_type else {
            return Err(self.fail(ShareError::Validation(
                "Please choose what you would like to share.".to_string(),
            )));
        };

        if let Err(err) = check_dog_selection(post_type, &self.selected_dogs) {
            return Err(self.fail(err));
        }

        let Some(schedule) = self.grid.saved() else {
            return Err(self.fail(ShareError::Validation(
                "Please save your availability before submitting.".to_string(),
            )));
        };

        let built = NewAvailabilityPost::build(
            self.profile.id,
            post_type,
            &self.selected_dogs,
            schedule,
            &self.location_choice(),
            self.details.clone(),
        );

        match built {
            Ok(post) => {
                self.submitting = true;
                self.error = None;
                Ok(post)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Records the insert result and clears the in-flight flag.
    pub fn complete_submit(
        &mut self,
        outcome: ShareResult<CreateAvailabilityResponse>,
    ) -> ShareResult<CreateAvailabilityResponse> {
        self.submitting = false;

        match outcome {
            Ok(created) => {
                info!(post_id = %created.id, "availability post created");
                self.error = None;
                Ok(created)
            }
            Err(err) => {
                warn!(error = %err, "failed to create availability post");
                self.error = Some(format!(
                    "Failed to create availability post: {}",
                    err.user_message()
                ));
                Err(err)
            }
        }
    }

    pub async fn submit<S>(&mut self, store: &S) -> ShareResult<CreateAvailabilityResponse>
    where
        S: AvailabilityStore + ?Sized,
    {
        let post = self.begin_submit()?;
        let outcome = store.insert(&post).await;
        self.complete_submit(outcome)
    }
}
