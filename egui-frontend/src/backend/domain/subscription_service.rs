//! Queries over the subscription list used by the header, tooltip and
//! details panel.

use shared::Subscription;

/// Subscription queries and formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct SubscriptionService;

impl SubscriptionService {
    pub fn new() -> Self {
        Self
    }

    /// Subscriptions charged on `day`, in list order
    pub fn due_on_day<'a>(&self, subscriptions: &'a [Subscription], day: u32) -> Vec<&'a Subscription> {
        subscriptions.iter().filter(|sub| sub.due_day == day).collect()
    }

    /// Sum of all monthly costs
    pub fn total_monthly_spend(&self, subscriptions: &[Subscription]) -> f64 {
        subscriptions.iter().map(|sub| sub.cost).sum()
    }

    /// Format a dollar amount with two decimals, e.g. "$15.99"
    pub fn format_cost(&self, amount: f64) -> String {
        format!("${:.2}", amount)
    }

    /// Look a subscription up by its unique name
    pub fn find_by_name<'a>(&self, subscriptions: &'a [Subscription], name: &str) -> Option<&'a Subscription> {
        subscriptions.iter().find(|sub| sub.name == name)
    }
}

/// The subscription list shipped with the app
pub fn default_subscriptions() -> Vec<Subscription> {
    vec![
        Subscription::new("ChatGPT", "openai", 27.52, 2),
        Subscription::new("Netflix", "netflix", 15.99, 15),
        Subscription::new("Prime", "prime-video", 14.99, 5),
        Subscription::new("Disney+", "disney", 7.99, 20),
        Subscription::new("Spotify", "spotify", 9.99, 1),
        Subscription::new("ApplePay", "apple-pay", 14.99, 2),
        Subscription::new("Adobe", "adobe", 7.99, 2),
        Subscription::new("Twitter", "x", 19.99, 2),
    ]
}
