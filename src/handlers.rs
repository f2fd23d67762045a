use crate::api::ApiClient;
use crate::errors::ClientError;
use crate::models::{CalculationRequest, CalculationResult, Credentials, Operator, SessionInfo, Theme};
use crate::render;
use crate::state::ViewState;
use crate::storage::{FIRST_NAME_KEY, Store};
use crate::ui::{Element, Page};
use tracing::{error, info, warn};

pub const HOME_ROUTE: &str = "/";
pub const EMPTY_OPERAND_ALERT: &str = "Please enter both numbers.";
pub const INVALID_OPERAND_ALERT: &str = "Operands must be numbers.";
pub const UNKNOWN_OPERATOR_ALERT: &str = "Choose one of + - * /.";
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect password or login!";
pub const REGISTER_FAILED_ALERT: &str = "Failed to register. Please try again.";

pub struct Controller {
    api: ApiClient,
    store: Store,
    state: ViewState,
}

impl Controller {
    pub fn new(api: ApiClient, store: Store) -> Self {
        let state = ViewState::from_store(&store);
        Self { api, store, state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Page bootstrap: theme, login prefill, then session info and history in parallel.
    pub async fn load_page(&mut self, page: &mut impl Page) {
        render::apply_theme(page, &self.state);

        if let Some(name) = self.store.get(FIRST_NAME_KEY) {
            if page.value(Element::LoginField).is_some_and(|value| value.is_empty()) {
                page.set_value(Element::LoginField, name);
            }
        }

        let (session, history) = tokio::join!(self.api.session_info(), self.api.history());

        match session {
            Ok(info) => {
                render::render_session(page, &info);
                self.state.session = Some(info);
            }
            Err(err) => warn!("session info unavailable: {err}"),
        }
        match history {
            Ok(entries) => render::render_history(page, &entries),
            Err(err) => warn!("history unavailable: {err}"),
        }
    }

    /// Reads the calculator form and submits it.
    pub async fn submit_form(&self, page: &mut impl Page) -> Result<CalculationResult, ClientError> {
        let operand1 = page.value(Element::Operand1).unwrap_or_default();
        let operand2 = page.value(Element::Operand2).unwrap_or_default();
        let operator = page.value(Element::Operator).unwrap_or_default();
        self.compute_and_submit(page, &operand1, &operand2, &operator).await
    }

    pub async fn compute_and_submit(
        &self,
        page: &mut impl Page,
        operand1_raw: &str,
        operand2_raw: &str,
        operator_symbol: &str,
    ) -> Result<CalculationResult, ClientError> {
        let request = match parse_calculation(operand1_raw, operand2_raw, operator_symbol) {
            Ok(request) => request,
            Err(err) => {
                warn!("calculation blocked: {err}");
                page.alert(validation_alert(&err));
                return Err(err);
            }
        };

        let result = self.api.calculate(request).await.inspect_err(|err| {
            error!(operator = %request.operator, "calculation failed: {err}");
        })?;

        render::render_result(page, &result);
        Ok(result)
    }

    pub async fn fetch_session_info(&mut self, page: &mut impl Page) -> Result<SessionInfo, ClientError> {
        let info = self.api.session_info().await.inspect_err(|err| {
            warn!("session info unavailable: {err}");
        })?;
        render::render_session(page, &info);
        self.state.session = Some(info.clone());
        Ok(info)
    }

    pub async fn login(&self, page: &mut impl Page, name: &str, password: &str) -> Result<(), ClientError> {
        let credentials = Credentials {
            name: name.to_string(),
            password: password.to_string(),
        };
        match self.api.login(&credentials).await {
            Ok(()) => {
                info!(name, "logged in");
                page.navigate(HOME_ROUTE);
                Ok(())
            }
            Err(err @ ClientError::ServerRejected(_)) => {
                warn!(name, "login rejected: {err}");
                page.set_text(Element::LoginMessage, LOGIN_FAILED_MESSAGE);
                Err(err)
            }
            Err(err) => {
                error!(name, "login failed: {err}");
                Err(err)
            }
        }
    }

    pub async fn register(&mut self, page: &mut impl Page, name: &str, password: &str) -> Result<(), ClientError> {
        let credentials = Credentials {
            name: name.to_string(),
            password: password.to_string(),
        };
        if let Err(err) = self.api.register(&credentials).await {
            error!(name, "registration failed: {err}");
            page.alert(REGISTER_FAILED_ALERT);
            return Err(err);
        }

        info!(name, "registered");
        if let Err(err) = self.store.set(FIRST_NAME_KEY, name).await {
            warn!("could not cache first name: {err}");
        }
        page.navigate(HOME_ROUTE);
        Ok(())
    }

    pub async fn logout(&mut self, page: &mut impl Page) -> Result<(), ClientError> {
        self.api.logout().await.inspect_err(|err| {
            error!("logout failed: {err}");
        })?;
        self.state.session = None;
        page.navigate(HOME_ROUTE);
        Ok(())
    }

    pub async fn render_history(&self, page: &mut impl Page) -> Result<(), ClientError> {
        let entries = self.api.history().await.inspect_err(|err| {
            warn!("history unavailable: {err}");
        })?;
        render::render_history(page, &entries);
        Ok(())
    }

    pub async fn render_users(&self, page: &mut impl Page) -> Result<(), ClientError> {
        let users = self.api.users().await.inspect_err(|err| {
            warn!("user list unavailable: {err}");
        })?;
        render::render_users(page, &users);
        Ok(())
    }

    /// Leaves the rendered list untouched; call [`Self::render_users`] to reflect the deletion.
    pub async fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        match self.api.delete_user(id).await {
            Ok(()) => {
                info!(user_id = id, "user deleted");
                Ok(())
            }
            Err(ClientError::DeleteRefused) => {
                error!(user_id = id, "deletion refused by backend");
                Err(ClientError::DeleteRefused)
            }
            Err(err) => {
                error!(user_id = id, "deletion failed: {err}");
                Err(err)
            }
        }
    }

    /// Persists first; on failure the applied theme stays as it was.
    pub async fn toggle_theme(&mut self, page: &mut impl Page) -> Result<Theme, ClientError> {
        let next = self.state.theme.toggled();
        self.store
            .set(Theme::STORAGE_KEY, next.class_name())
            .await
            .inspect_err(|err| error!("failed to persist theme: {err}"))?;
        self.state.theme = next;
        render::apply_theme(page, &self.state);
        Ok(next)
    }
}

pub fn parse_calculation(
    operand1_raw: &str,
    operand2_raw: &str,
    operator_symbol: &str,
) -> Result<CalculationRequest, ClientError> {
    let (operand1_raw, operand2_raw) = (operand1_raw.trim(), operand2_raw.trim());
    if operand1_raw.is_empty() || operand2_raw.is_empty() {
        return Err(ClientError::EmptyOperand);
    }
    let operand1 = parse_operand(operand1_raw)?;
    let operand2 = parse_operand(operand2_raw)?;
    let operator = Operator::from_symbol(operator_symbol)
        .ok_or_else(|| ClientError::UnknownOperator(operator_symbol.to_string()))?;

    Ok(CalculationRequest {
        operand1,
        operand2,
        operator,
    })
}

fn parse_operand(raw: &str) -> Result<f64, ClientError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ClientError::InvalidOperand(raw.to_string())),
    }
}

fn validation_alert(err: &ClientError) -> &'static str {
    match err {
        ClientError::EmptyOperand => EMPTY_OPERAND_ALERT,
        ClientError::UnknownOperator(_) => UNKNOWN_OPERATOR_ALERT,
        _ => INVALID_OPERAND_ALERT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_operands_are_rejected_first() {
        assert_eq!(parse_calculation("", "2", "+"), Err(ClientError::EmptyOperand));
        assert_eq!(parse_calculation("1", "   ", "+"), Err(ClientError::EmptyOperand));
        assert_eq!(parse_calculation("", "", "?"), Err(ClientError::EmptyOperand));
        assert_eq!(parse_calculation("abc", "", "+"), Err(ClientError::EmptyOperand));
        assert_eq!(parse_calculation("abc", " ", "%"), Err(ClientError::EmptyOperand));
    }

    #[test]
    fn operands_must_be_finite_numbers() {
        assert_eq!(
            parse_calculation("abc", "2", "+"),
            Err(ClientError::InvalidOperand("abc".into()))
        );
        assert_eq!(
            parse_calculation("1", "inf", "+"),
            Err(ClientError::InvalidOperand("inf".into()))
        );
    }

    #[test]
    fn operator_symbol_is_validated() {
        assert_eq!(
            parse_calculation("1", "2", "%"),
            Err(ClientError::UnknownOperator("%".into()))
        );
        let request = parse_calculation(" 1.5 ", "2", "*").unwrap();
        assert_eq!(request.operand1, 1.5);
        assert_eq!(request.operator, Operator::Mul);
    }

    #[test]
    fn validation_errors_map_to_alerts() {
        assert_eq!(validation_alert(&ClientError::EmptyOperand), EMPTY_OPERAND_ALERT);
        assert_eq!(
            validation_alert(&ClientError::InvalidOperand("x".into())),
            INVALID_OPERAND_ALERT
        );
    }
}
