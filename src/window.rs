//! Window lifecycle - load builds the face, unload tears it down.
//!
//! Each resource is acquired in `load` and released in `unload` exactly
//! once; out-of-order calls are errors rather than silent no-ops.

use embedded_graphics::prelude::Size;

use crate::error::Error;
use crate::face::{Effects, Face};
use crate::profile::Profile;
use crate::surface::Surface;
use crate::ui::Event;

pub struct Window {
    profile: Profile,
    face: Option<Face>,
}

impl Window {
    pub const fn new(profile: Profile) -> Self {
        Self {
            profile,
            face: None,
        }
    }

    /// Create the face for a root layer of `bounds`.
    pub fn load(&mut self, bounds: Size) -> Result<Effects, Error> {
        if self.face.is_some() {
            return Err(Error::AlreadyLoaded);
        }
        info!("window: load {}x{}", bounds.width, bounds.height);
        let face = self.face.insert(Face::new(self.profile, bounds));
        Ok(face.start())
    }

    /// Tear the face down. The returned effects carry the final
    /// animation command for the host.
    pub fn unload(&mut self) -> Result<Effects, Error> {
        let mut face = self.face.take().ok_or(Error::NotLoaded)?;
        info!("window: unload");
        Ok(face.stop())
    }

    pub fn handle<S: Surface + ?Sized>(
        &mut self,
        event: Event,
        surface: &mut S,
    ) -> Result<Effects, Error> {
        let face = self.face.as_mut().ok_or(Error::NotLoaded)?;
        Ok(face.handle(event, surface))
    }

    pub fn is_loaded(&self) -> bool {
        self.face.is_some()
    }

    pub fn face(&self) -> Option<&Face> {
        self.face.as_ref()
    }
}
