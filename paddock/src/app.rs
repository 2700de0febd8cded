#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::sync::Arc;

use iced::{Element, Point, Size, Subscription, Task, Theme, window};
use paddock_api::{
    ApiClient, ApiError, HttpNotificationSource, HttpProfileSource,
    NotificationSource, ProfileSource, Session, SessionProvider,
    StaticSessionProvider,
};
use secrecy::ExposeSecret;

use crate::breakpoint::{
    BreakpointObserver, BreakpointSubscription, COMPACT_RANGE, MappedObserver,
    ViewportMode,
};
use crate::config::ShellConfig;
use crate::dismiss::{Dismisser, MappedRegistrar};
use crate::generation::FetchGenerations;
use crate::theme::AppTheme;
use crate::widgets::notifications::{
    NotificationsEvent, NotificationsIntent, NotificationsWidget,
};
use crate::widgets::profile::{
    ProfileCtx, ProfileEvent, ProfileIntent, ProfileWidget,
};
use crate::widgets::sidebar::{
    SidebarCtx, SidebarEvent, SidebarIntent, SidebarWidget,
};
use crate::widgets::top_bar::{TopBarEvent, TopBarIntent, TopBarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 640.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub(crate) const INITIAL_WINDOW_SIZE: Size = Size::new(1440.0, 900.0);

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Widgets
    Sidebar(SidebarEvent),
    Notifications(NotificationsEvent),
    Profile(ProfileEvent),
    TopBar(TopBarEvent),
    // Session
    SignIn,
    SignOut,
    // Outside-interaction listener
    PointerMoved(Point),
    PointerPressed,
    TouchPressed(Point),
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(window::Event),
    WindowSized(Size),
}

impl AppEvent {
    pub(crate) fn sidebar_intent(intent: SidebarIntent) -> Self {
        AppEvent::Sidebar(SidebarEvent::Intent(intent))
    }

    pub(crate) fn notifications_intent(intent: NotificationsIntent) -> Self {
        AppEvent::Notifications(NotificationsEvent::Intent(intent))
    }

    pub(crate) fn profile_intent(intent: ProfileIntent) -> Self {
        AppEvent::Profile(ProfileEvent::Intent(intent))
    }

    pub(crate) fn top_bar_intent(intent: TopBarIntent) -> Self {
        AppEvent::TopBar(TopBarEvent::Intent(intent))
    }
}

/// Data sources shared by the mounted widgets.
#[derive(Clone)]
pub(crate) struct DataSources {
    pub(crate) profile: Arc<dyn ProfileSource>,
    pub(crate) notifications: Arc<dyn NotificationSource>,
}

impl DataSources {
    /// Build the HTTP data sources on one shared client.
    pub(crate) fn connect(
        config: &ShellConfig,
        session: Arc<dyn SessionProvider>,
    ) -> Result<Self, ApiError> {
        let client = ApiClient::new(config.api.clone(), session)?;
        Ok(Self {
            profile: Arc::new(HttpProfileSource::new(client.clone())),
            notifications: Arc::new(HttpNotificationSource::new(client)),
        })
    }
}

/// Widgets that exist only while a session is present.
///
/// Dropping the shell releases every breakpoint subscription and overlay
/// registration its widgets hold.
pub(crate) struct Shell {
    pub(crate) sidebar: SidebarWidget,
    pub(crate) notifications: NotificationsWidget,
    pub(crate) profile: ProfileWidget,
    pub(crate) top_bar: TopBarWidget,
    pub(crate) sources: DataSources,
    _compact: BreakpointSubscription,
}

impl Shell {
    /// Mount every session-scoped widget for the current window.
    ///
    /// Breakpoint subscriptions are acquired here and their initial
    /// publications are applied before this returns, so the first frame
    /// already reflects the viewport. Returns the initial fetch tasks.
    pub(crate) fn mount(
        observer: &BreakpointObserver<AppEvent>,
        dismisser: &Dismisser<AppEvent>,
        generations: &FetchGenerations,
        window: Size,
        sources: DataSources,
    ) -> (Self, Task<AppEvent>) {
        let (compact, _) = observer.subscribe(COMPACT_RANGE, |compact| {
            AppEvent::sidebar_intent(SidebarIntent::ViewportModeChanged(
                ViewportMode::from_compact(compact),
            ))
        });
        let mode = ViewportMode::for_width(observer.width());

        let sidebar_overlays =
            MappedRegistrar::new(dismisser, AppEvent::sidebar_intent);
        let (sidebar, sidebar_task) = SidebarWidget::mount(
            mode,
            &MappedObserver::new(observer, AppEvent::sidebar_intent),
            &SidebarCtx {
                overlays: &sidebar_overlays,
                window,
            },
        );

        let profile_overlays =
            MappedRegistrar::new(dismisser, AppEvent::profile_intent);
        let (profile, profile_task) = ProfileWidget::mount(&ProfileCtx {
            overlays: &profile_overlays,
            window,
            source: &sources.profile,
            generations,
        });

        let shell = Self {
            top_bar: TopBarWidget::new(sidebar.active_item().label()),
            sidebar,
            notifications: NotificationsWidget::new(),
            profile,
            sources,
            _compact: compact,
        };
        let task = Task::batch([
            sidebar_task.map(AppEvent::Sidebar),
            profile_task.map(AppEvent::Profile),
        ]);

        (shell, task)
    }
}

/// Root application state.
pub(crate) struct App {
    pub(crate) config: ShellConfig,
    pub(crate) session: Arc<StaticSessionProvider>,
    pub(crate) sources: Option<DataSources>,
    pub(crate) observer: BreakpointObserver<AppEvent>,
    pub(crate) dismisser: Dismisser<AppEvent>,
    /// Outlives every mounted shell so stamps stay unique across sessions.
    pub(crate) generations: FetchGenerations,
    pub(crate) theme: AppTheme,
    pub(crate) window_size: Size,
    pub(crate) shell: Option<Shell>,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new(config: ShellConfig) -> (Self, Task<AppEvent>) {
        let session = Arc::new(match &config.token {
            Some(token) => {
                StaticSessionProvider::with_token(token.expose_secret())
            },
            None => StaticSessionProvider::empty(),
        });

        let provider: Arc<dyn SessionProvider> = session.clone();
        let sources = match DataSources::connect(&config, provider) {
            Ok(sources) => Some(sources),
            Err(err) => {
                log::error!("backend client setup failed: {err}");
                None
            },
        };

        let mut app = App {
            config,
            session,
            sources,
            observer: BreakpointObserver::new(INITIAL_WINDOW_SIZE.width),
            dismisser: Dismisser::new(),
            generations: FetchGenerations::new(),
            theme: AppTheme::default(),
            window_size: INITIAL_WINDOW_SIZE,
            shell: None,
        };

        let mount = crate::routers::session::mount_shell(&mut app);
        let measure = window::latest()
            .and_then(window::size)
            .map(AppEvent::WindowSized);

        (app, Task::batch([mount, measure]))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Paddock")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Run follow-up events through the update loop right away.
    ///
    /// Used for publications that must land before the next runtime event,
    /// such as dismissals triggered by the pointer-down that precedes a
    /// button release.
    pub(crate) fn dispatch(
        &mut self,
        events: impl IntoIterator<Item = AppEvent>,
    ) -> Task<AppEvent> {
        let tasks: Vec<_> =
            events.into_iter().map(|event| self.update(event)).collect();
        Task::batch(tasks)
    }

    /// Start a session from the configured credential.
    pub(crate) fn begin_session(&self) -> bool {
        match &self.config.token {
            Some(token) => {
                self.session.begin(Session::new(token.expose_secret()));
                true
            },
            None => false,
        }
    }
}
