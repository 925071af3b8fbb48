pub mod add_update;
pub mod get_commission;
pub mod kanban;
pub mod list_commissions;
pub mod tag_commission;
pub mod update_commission;

pub use add_update::add_update_handler;
pub use get_commission::get_commission_handler;
pub use kanban::kanban_handler;
pub use list_commissions::{list_commissions_handler, ListCommissionsQuery};
pub use tag_commission::{tag_commission_handler, TagCommissionDto};
pub use update_commission::{update_commission_handler, UpdateCommissionDto};

use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::auth::application::domain::entities::UserId;
use crate::commission::application::domain::entities::Viewer;

fn viewer_of(user: &OptionalUser) -> Viewer {
    Viewer::from(user.user().map(|u| UserId::from(u.user_id)))
}
