//! Run-time selection among the face's behaviour variants.

/// How the monochrome renderer fills rows past the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FillStyle {
    /// Pure black/white split at the boundary.
    Threshold,
    /// Seven-step 1-bit dither ramp below the boundary.
    Dither,
}

/// When the animation timer runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scheduling {
    /// Timer runs only while a button is held; every button edge redraws.
    OnDemand,
    /// Timer runs from load to unload.
    Continuous,
}

/// What unload does with the animation handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Teardown {
    Destroy,
    UnscheduleOnly,
}

/// Pixel capability of the attached display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayKind {
    Monochrome,
    Colour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Profile {
    pub fill: FillStyle,
    pub scheduling: Scheduling,
    pub teardown: Teardown,
    pub display: DisplayKind,
}

impl Profile {
    /// Hard threshold, redraw per button edge, timer only while held.
    pub const CLASSIC: Profile = Profile {
        fill: FillStyle::Threshold,
        scheduling: Scheduling::OnDemand,
        teardown: Teardown::UnscheduleOnly,
        display: DisplayKind::Monochrome,
    };

    /// Dither ramp with a perpetual timer.
    pub const DITHERED: Profile = Profile {
        fill: FillStyle::Dither,
        scheduling: Scheduling::Continuous,
        teardown: Teardown::Destroy,
        display: DisplayKind::Monochrome,
    };

    /// Hue bands with a perpetual timer.
    pub const COLOUR: Profile = Profile {
        fill: FillStyle::Dither,
        scheduling: Scheduling::Continuous,
        teardown: Teardown::Destroy,
        display: DisplayKind::Colour,
    };

    /// Pick the monochrome or colour preset for a display.
    pub const fn for_display(display: DisplayKind) -> Profile {
        match display {
            DisplayKind::Monochrome => Profile::DITHERED,
            DisplayKind::Colour => Profile::COLOUR,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::DITHERED
    }
}
