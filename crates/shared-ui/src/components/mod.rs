// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod dialog;
pub mod input;
pub mod page_header;
pub mod sheet;
pub mod spinner;
pub mod textarea;

// Primitive wrappers
pub mod avatar;
pub mod progress;
pub mod separator;
pub mod toast;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use separator::*;
pub use sheet::*;
pub use spinner::*;
pub use textarea::*;
pub use toast::*;
