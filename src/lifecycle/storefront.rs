use tracing::{error, info};

use crate::auth::Authenticator;
use crate::clients::StorefrontClient;
use crate::model::StateStore;
use crate::shell::ShellClient;
use crate::storefront_actor::{self, actions::PAGE_HOME, StorefrontError, UiContext};
use std::sync::Arc;

/// What the page's static markup provides at startup.
///
/// The main content region is the one anchor the storefront cannot work
/// without: every view loads into it. Optional anchors (search boxes, the
/// payment-section containers, the order-number display) are shell-side
/// concerns and may be absent at any time.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub has_main_region: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            has_main_region: true,
        }
    }
}

/// The running storefront: the actor task plus its client.
///
/// # Example
///
/// ```ignore
/// let (shell, receiver) = shell::channel(64);
/// let storefront = Storefront::start(
///     PageLayout::default(),
///     StateStore::new(),
///     shell,
///     Arc::new(my_authenticator),
/// )
/// .await?;
///
/// storefront.client.click(target).await?;
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    pub client: StorefrontClient,
    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Validates the page layout, spawns the dispatcher actor, and performs
    /// the boot render (badge, login button, home page) in the order the
    /// original page initializes.
    ///
    /// # Errors
    ///
    /// [`StorefrontError::MissingMainRegion`] if the layout has no main
    /// content region. This is fatal for initialization: no actor is spawned
    /// and no handlers are attached.
    pub async fn start(
        layout: PageLayout,
        store: StateStore,
        shell: ShellClient,
        auth: Arc<dyn Authenticator>,
    ) -> Result<Self, StorefrontError> {
        if !layout.has_main_region {
            error!("Main content region not found, aborting initialization");
            return Err(StorefrontError::MissingMainRegion);
        }

        // Boot-render values come from the injected store, read before the
        // actor takes ownership of it.
        let initial_badge = store.cart.total_quantity();
        let initial_user = store.user.as_ref().map(|u| u.name.clone());

        let (actor, client) = storefront_actor::new(store);
        let handle = tokio::spawn(actor.run(UiContext {
            shell: shell.clone(),
            auth,
        }));

        shell.update_cart_badge(initial_badge).await;
        shell.refresh_login_button(initial_user).await;
        shell.load_page(PAGE_HOME).await;

        info!("Storefront initialized");
        Ok(Self { client, handle })
    }

    /// Gracefully shuts down: drops the client (closing the mailbox) and
    /// waits for the actor task to drain and exit.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");
        drop(self.client);

        self.handle
            .await
            .map_err(|e| StorefrontError::TaskFailed(format!("{e:?}")))?;

        info!("Storefront shutdown complete");
        Ok(())
    }
}
