pub mod commission_notifier;
pub mod email_sender;

pub use commission_notifier::{
    CommissionNotifier, NewRequestNotice, NotificationError, StatusUpdateNotice,
};
pub use email_sender::{EmailError, EmailSender};
