//! Console application state: login screen and dashboard.
//!
//! `App` turns console commands into worker dispatches and worker events into
//! text. It never blocks on the network; every backend call goes through the
//! `ActionWorker`. The session is created on the successful verification event
//! and moved into the dashboard screen, which hands its `Authorization` value to
//! each data request.
use std::sync::Arc;

use chrono::Local;
use log::{debug, info, warn};
use policy_common::holdings::locate;
use policy_common::{PhoneNumber, PolicyError, Session};

use crate::args::Settings;
use crate::model::action::{Action, Outcome, WorkerEvent};
use crate::model::command::UserCommand;
use crate::session_client::SessionClient;
use crate::transport::Transport;
use crate::view;
use crate::worker::ActionWorker;

/// Which screen the console is on.
#[derive(Debug)]
pub enum Screen {
    /// Not logged in.
    Login {
        /// Set once a passcode was issued for this number.
        pending_phone: Option<PhoneNumber>,
    },
    /// Logged in.
    Dashboard {
        /// Session opened by the successful verification.
        session: Session,
    },
}

/// Foreground state of the console client.
pub struct App<T> {
    client: Arc<SessionClient<T>>,
    worker: ActionWorker,
    settings: Settings,
    screen: Screen,
    quit: bool,
}

impl<T: Transport + 'static> App<T> {
    /// Create a new app on the login screen.
    pub fn new(client: Arc<SessionClient<T>>, worker: ActionWorker, settings: Settings) -> Self {
        Self {
            client,
            worker,
            settings,
            screen: Screen::Login {
                pending_phone: None,
            },
            quit: false,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Session, once logged in.
    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Dashboard { session } => Some(session),
            Screen::Login { .. } => None,
        }
    }

    /// Backend origin, as shown in connection errors.
    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Prompt label for the current screen.
    pub fn prompt(&self) -> &'static str {
        match self.screen {
            Screen::Login { .. } => "login",
            Screen::Dashboard { .. } => "dashboard",
        }
    }

    /// Whether `action` is waiting on the backend.
    pub fn is_in_flight(&self, action: Action) -> bool {
        self.worker.is_in_flight(action)
    }

    /// Whether any dispatched action has yet to report back.
    pub fn has_pending(&self) -> bool {
        self.worker.pending() > 0
    }

    /// Handles one line of console input and returns the text to show.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let command = UserCommand::parse(line);
        debug!("Command: {:?}", command);

        match command {
            UserCommand::Empty => Vec::new(),
            UserCommand::Help => vec![view::help(self.session().is_some())],
            UserCommand::Quit => {
                info!("Quit requested");
                self.quit = true;
                Vec::new()
            }
            UserCommand::Unknown(verb) => vec![view::unknown_command(&verb)],
            UserCommand::RequestOtp(phone) => self.request_otp(phone),
            UserCommand::VerifyOtp(otp) => self.verify_otp(otp),
            UserCommand::Holdings => self.fetch_holdings(),
            UserCommand::Lookup(policy) => self.lookup_policy(policy),
            UserCommand::Rates => match self.screen {
                Screen::Dashboard { .. } => vec![view::rates_placeholder()],
                Screen::Login { .. } => vec![view::login_required()],
            },
        }
    }

    /// Applies a finished action and returns the text to show.
    pub fn handle_event(&mut self, event: WorkerEvent) -> Vec<String> {
        let WorkerEvent { action, outcome } = event;
        match outcome {
            Ok(Outcome::OtpRequested(phone)) => {
                if let Screen::Login { pending_phone } = &mut self.screen {
                    *pending_phone = Some(phone);
                }
                vec![view::otp_requested()]
            }
            Ok(Outcome::LoggedIn(session)) => {
                info!("Logged in as {}", session.phone_number());
                self.screen = Screen::Dashboard { session };
                let mut out = vec![view::login_succeeded()];
                out.extend(self.fetch_holdings());
                out
            }
            Ok(Outcome::Holdings(raw)) => vec![view::holdings(&raw, Local::now())],
            Ok(Outcome::PolicyFound { policy, details }) => {
                vec![view::policy_details(&policy, &details)]
            }
            Err(err) => {
                warn!("{} failed: {}", action, err);
                vec![self.failure(action, &err)]
            }
        }
    }

    fn request_otp(&mut self, raw_phone: String) -> Vec<String> {
        let Screen::Login { pending_phone } = &self.screen else {
            return vec![view::already_logged_in()];
        };
        if let Some(phone) = pending_phone {
            return vec![view::otp_already_requested(phone.as_str())];
        }
        if let Err(err) = PhoneNumber::parse(&raw_phone) {
            return vec![self.failure(Action::RequestOtp, &err)];
        }

        let client = Arc::clone(&self.client);
        self.dispatch(Action::RequestOtp, move || {
            client.request_otp(&raw_phone).map(Outcome::OtpRequested)
        })
    }

    fn verify_otp(&mut self, otp: String) -> Vec<String> {
        let phone = match &self.screen {
            Screen::Dashboard { .. } => return vec![view::already_logged_in()],
            Screen::Login {
                pending_phone: None,
            } => return vec![view::otp_not_requested()],
            Screen::Login {
                pending_phone: Some(phone),
            } => phone.clone(),
        };

        let client = Arc::clone(&self.client);
        self.dispatch(Action::VerifyOtp, move || {
            client.verify_otp(&phone, &otp).map(Outcome::LoggedIn)
        })
    }

    fn fetch_holdings(&mut self) -> Vec<String> {
        let Some(authorization) = self.authorization() else {
            return vec![view::login_required()];
        };

        let client = Arc::clone(&self.client);
        let mut out = self.dispatch(Action::FetchHoldings, move || {
            client
                .fetch_authorized_data(&authorization)
                .map(Outcome::Holdings)
        });
        if out.is_empty() {
            out.push(view::fetching_holdings());
        }
        out
    }

    fn lookup_policy(&mut self, policy: String) -> Vec<String> {
        let Some(authorization) = self.authorization() else {
            return vec![view::login_required()];
        };
        if policy.is_empty() {
            return vec![view::missing_policy_number()];
        }

        let searching = view::searching_policy(&policy);
        let client = Arc::clone(&self.client);
        let mut out = self.dispatch(Action::LookupPolicy, move || {
            let raw = client.fetch_authorized_data(&authorization)?;
            match locate(&raw, &policy) {
                Some(details) => Ok(Outcome::PolicyFound { policy, details }),
                None => Err(PolicyError::NotFound { policy, raw }),
            }
        });
        if out.is_empty() {
            out.push(searching);
        }
        out
    }

    fn authorization(&self) -> Option<String> {
        self.session()
            .map(|session| session.authorization(&self.settings.auth_scheme))
    }

    /// Dispatches `job`; returns nothing on success, or the refusal message.
    fn dispatch<F>(&self, action: Action, job: F) -> Vec<String>
    where
        F: FnOnce() -> policy_common::Result<Outcome> + Send + 'static,
    {
        match self.worker.dispatch(action, job) {
            Ok(()) => Vec::new(),
            Err(err) => vec![self.failure(action, &err)],
        }
    }

    fn failure(&self, action: Action, err: &PolicyError) -> String {
        view::failure(action, err, &self.settings.base_url)
    }
}
