pub mod reservation;
pub mod restaurant;

mod router;
pub use router::get_router;
