use crate::errors::ClientError;
use crate::handlers::Controller;
use crate::models::Operator;
use crate::ui::{Element, Page};

pub const HELP: &str = "\
commands:
  <a> <op> <b>              calculate, op is one of + - * /
  calc <a> <op> <b>         same as above
  login <name> <password>
  register <name> <password>
  logout
  whoami                    fetch session info
  history
  users
  delete <id>               delete a user and reload the list
  theme                     toggle light/dark
  reload                    re-run the page bootstrap
  help
  quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Calculate {
        operand1: String,
        operator: String,
        operand2: String,
    },
    Login {
        name: String,
        password: String,
    },
    Register {
        name: String,
        password: String,
    },
    Logout,
    Session,
    History,
    Users,
    DeleteUser(String),
    ToggleTheme,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn parse_action(line: &str) -> Result<Action, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let action = match words.as_slice() {
        ["calc", a, op, b] | [a, op, b] if Operator::from_symbol(op).is_some() => Action::Calculate {
            operand1: a.to_string(),
            operator: op.to_string(),
            operand2: b.to_string(),
        },
        ["login", name, password] => Action::Login {
            name: name.to_string(),
            password: password.to_string(),
        },
        ["register", name, password] => Action::Register {
            name: name.to_string(),
            password: password.to_string(),
        },
        ["logout"] => Action::Logout,
        ["whoami"] => Action::Session,
        ["history"] => Action::History,
        ["users"] => Action::Users,
        ["delete", id] => Action::DeleteUser(id.to_string()),
        ["theme"] => Action::ToggleTheme,
        ["reload"] => Action::Reload,
        ["help"] | ["?"] => Action::Help,
        ["quit"] | ["exit"] => Action::Quit,
        [] => return Err("empty command".to_string()),
        _ => return Err(format!("unrecognised command: {}", line.trim())),
    };
    Ok(action)
}

/// Routes a user action to its controller operation, filling form fields the
/// way the browser would before the click handler runs.
pub async fn dispatch(
    controller: &mut Controller,
    page: &mut impl Page,
    action: Action,
) -> Result<Flow, ClientError> {
    match action {
        Action::Calculate {
            operand1,
            operator,
            operand2,
        } => {
            page.set_value(Element::Operand1, &operand1);
            page.set_value(Element::Operator, &operator);
            page.set_value(Element::Operand2, &operand2);
            controller.submit_form(page).await?;
        }
        Action::Login { name, password } => {
            page.set_value(Element::LoginField, &name);
            page.set_value(Element::PasswordField, &password);
            controller.login(page, &name, &password).await?;
        }
        Action::Register { name, password } => controller.register(page, &name, &password).await?,
        Action::Logout => controller.logout(page).await?,
        Action::Session => {
            controller.fetch_session_info(page).await?;
        }
        Action::History => controller.render_history(page).await?,
        Action::Users => controller.render_users(page).await?,
        Action::DeleteUser(id) => {
            controller.delete_user(&id).await?;
            controller.render_users(page).await?;
        }
        Action::ToggleTheme => {
            controller.toggle_theme(page).await?;
        }
        Action::Reload => controller.load_page(page).await,
        Action::Help => page.alert(HELP),
        Action::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
