use std::sync::Arc;

use crate::errors::AccessorError;
use crate::models::{ChildId, ChildProfile};

/// Read access to child profiles.
pub trait IChildProfiles: Send + Sync {
    /// `Ok(None)` when the child does not exist.
    fn child_profile(&self, child_id: ChildId) -> Result<Option<ChildProfile>, AccessorError>;
}

impl<T: IChildProfiles + ?Sized> IChildProfiles for Arc<T> {
    fn child_profile(&self, child_id: ChildId) -> Result<Option<ChildProfile>, AccessorError> {
        (**self).child_profile(child_id)
    }
}
