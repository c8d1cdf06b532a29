//! UI Components
//!
//! Pages and the pieces they are built from.

mod bucket_section;
mod item_form;
mod itinerary_card;
mod itinerary_page;
mod modal;
mod pre_trip_page;
mod settings_page;
mod shopping_page;
mod tab_bar;
mod todo_section;

pub use bucket_section::BucketSection;
pub use item_form::ItemFormFields;
pub use itinerary_card::ItineraryCard;
pub use itinerary_page::ItineraryPage;
pub use modal::Modal;
pub use pre_trip_page::PreTripPage;
pub use settings_page::SettingsPage;
pub use shopping_page::ShoppingPage;
pub use tab_bar::{BottomNav, TripTabBar};
pub use todo_section::TodoSection;
