pub mod button;
pub mod card;
pub mod detail_list;
pub mod input;
pub mod item_list;
pub mod page_header;
pub mod skeleton;
pub mod status_message;

pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use input::*;
pub use item_list::*;
pub use page_header::*;
pub use skeleton::*;
pub use status_message::*;
