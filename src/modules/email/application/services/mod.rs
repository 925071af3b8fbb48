mod email_commission_notifier;

pub use email_commission_notifier::EmailCommissionNotifier;
