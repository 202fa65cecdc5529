// src/services/subscription_service.rs
//
// Premium plans and the simulated payment flow. No real gateway is called.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{validate_payment_method, PaymentMethod, Plan, PremiumSubscription};
use crate::error::AppResult;
use crate::events::{EventBus, PremiumActivated};
use crate::integrations::AccountApi;
use crate::repositories::SubscriptionRepository;
use crate::services::auth_service::AuthService;
use crate::services::session::SessionContext;

pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_millis(2500);

pub struct SubscriptionService {
    account_api: Arc<dyn AccountApi>,
    repo: Arc<dyn SubscriptionRepository>,
    session: Arc<SessionContext>,
    auth: Arc<AuthService>,
    event_bus: Arc<EventBus>,
    payment_delay: Duration,
}

impl SubscriptionService {
    pub fn new(
        account_api: Arc<dyn AccountApi>,
        repo: Arc<dyn SubscriptionRepository>,
        session: Arc<SessionContext>,
        auth: Arc<AuthService>,
        event_bus: Arc<EventBus>,
        payment_delay: Duration,
    ) -> Self {
        Self {
            account_api,
            repo,
            session,
            auth,
            event_bus,
            payment_delay,
        }
    }

    pub fn plans(&self) -> Vec<Plan> {
        Plan::ALL.to_vec()
    }

    pub fn current_subscription(&self) -> Option<PremiumSubscription> {
        self.session.subscription()
    }

    /// Simulated checkout.
    ///
    /// The method is validated, the gateway delay elapses, the signed-in
    /// account is flagged premium when the backend accepts it, and the
    /// subscription is recorded locally whatever the backend said.
    pub async fn pay(&self, plan: Plan, method: PaymentMethod) -> AppResult<PremiumSubscription> {
        validate_payment_method(&method)?;

        log::info!(
            "Processing {} payment of {} FCFA",
            plan.label(),
            plan.price_fcfa()
        );
        tokio::time::sleep(self.payment_delay).await;

        let synced = match self.session.current_user() {
            Some(user) => match self.account_api.set_premium(user.id, true).await {
                Ok(updated) => {
                    self.session.set_user(updated)?;
                    true
                }
                Err(e) => {
                    log::warn!("Backend did not record premium for {}: {}", user.username, e);
                    false
                }
            },
            None => false,
        };

        let subscription = PremiumSubscription::activate(plan);
        self.repo.save(&subscription)?;
        self.session.set_subscription(Some(subscription.clone()));

        if let Err(e) = self.auth.reload().await {
            log::warn!("Profile reload after payment failed: {}", e);
        }

        self.event_bus.emit(PremiumActivated::new(plan, synced));
        Ok(subscription)
    }

    pub fn cancel(&self) -> AppResult<()> {
        self.repo.clear()?;
        self.session.set_subscription(None);
        log::info!("Premium subscription cancelled locally");
        Ok(())
    }
}
