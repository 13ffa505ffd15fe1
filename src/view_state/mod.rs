//! View state: render-ready projections of application state.
//!
//! UI rendering is a pure function of these structs; they keep the `ui`
//! module from reaching into loaders and stores directly.

mod detail_view;
mod home_view;
mod profile_view;

pub use detail_view::DetailViewState;
pub use home_view::HomeViewState;
pub use profile_view::ProfileViewState;
