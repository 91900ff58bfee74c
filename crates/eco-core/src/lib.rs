//! Environmental impact calculators for carbon, electricity, water and
//! plastic, with no dependency on any UI platform.

pub mod calculator;
pub mod carbon;
pub mod chart;
pub mod constants;
pub mod electricity;
pub mod input;
pub mod plastic;
pub mod session;
pub mod share;
pub mod tips;
pub mod view;
pub mod water;

pub use calculator::*;
pub use carbon::*;
pub use chart::*;
pub use electricity::*;
pub use input::*;
pub use plastic::*;
pub use session::*;
pub use share::*;
pub use tips::*;
pub use view::*;
pub use water::*;
