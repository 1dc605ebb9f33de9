//! End-to-end harness: a real server on an ephemeral port, driven through
//! page objects keyed on the screens' element identifiers.

#![allow(dead_code)]

use anyhow::{Context, bail};
use std::net::TcpListener;
use std::sync::Arc;

use testable_login::adapters::http::{TemplateEngine, run};
use testable_login::application::auth::LoginCoordinator;
use testable_login::domain::auth::NetworkService;

pub struct TestApp {
  pub address: String,
  pub client: reqwest::Client,
}

/// Starts the full application with the given network service
pub async fn spawn_app(service: Arc<dyn NetworkService>) -> anyhow::Result<TestApp> {
  let listener = TcpListener::bind("127.0.0.1:0").context("failed to bind random port")?;
  let port = listener.local_addr()?.port();

  let templates = TemplateEngine::new().context("failed to load templates")?;
  let coordinator = Arc::new(LoginCoordinator::new(service));

  let server = run(listener, templates, coordinator)?;
  tokio::spawn(server);

  let client = reqwest::Client::builder()
    .redirect(reqwest::redirect::Policy::limited(5))
    .build()?;

  Ok(TestApp {
    address: format!("http://127.0.0.1:{}", port),
    client,
  })
}

/// A rendered screen
pub struct Screen {
  pub url: reqwest::Url,
  pub status: reqwest::StatusCode,
  pub html: String,
}

impl Screen {
  async fn from_response(response: reqwest::Response) -> anyhow::Result<Self> {
    let url = response.url().clone();
    let status = response.status();
    let html = response.text().await?;
    Ok(Self { url, status, html })
  }

  pub fn has_element(&self, id: &str) -> bool {
    self.html.contains(&format!(r#"id="{}""#, id))
  }

  /// Returns the value of `attribute` on the tag carrying `id`
  pub fn attribute_of(&self, id: &str, attribute: &str) -> Option<String> {
    let marker = format!(r#"id="{}""#, id);
    let at = self.html.find(&marker)?;
    let start = self.html[..at].rfind('<')?;
    let end = at + self.html[at..].find('>')?;
    let tag = &self.html[start..end];

    let key = format!(r#"{}=""#, attribute);
    let value_start = tag.find(&key)? + key.len();
    let value_len = tag[value_start..].find('"')?;
    Some(tag[value_start..value_start + value_len].to_string())
  }
}

/// Page object for the login screen
pub struct LoginPage<'a> {
  app: &'a TestApp,
  screen: Screen,
}

impl<'a> LoginPage<'a> {
  pub const EMAIL_FIELD: &'static str = "email_field";
  pub const PASSWORD_FIELD: &'static str = "password_field";
  pub const LOGIN_BUTTON: &'static str = "login_button";

  pub async fn open(app: &'a TestApp) -> anyhow::Result<Self> {
    let response = app
      .client
      .get(format!("{}/login", app.address))
      .send()
      .await?;
    let screen = Screen::from_response(response).await?;

    for id in [Self::EMAIL_FIELD, Self::PASSWORD_FIELD, Self::LOGIN_BUTTON] {
      if !screen.has_element(id) {
        bail!("login screen is missing #{}", id);
      }
    }

    Ok(Self { app, screen })
  }

  /// Types into both fields and activates the login button
  pub async fn login(&self, email: &str, password: &str) -> anyhow::Result<Screen> {
    let email_name = self
      .screen
      .attribute_of(Self::EMAIL_FIELD, "name")
      .context("email field has no name")?;
    let password_name = self
      .screen
      .attribute_of(Self::PASSWORD_FIELD, "name")
      .context("password field has no name")?;
    let action = self
      .screen
      .attribute_of("login_form", "action")
      .context("login form has no action")?;

    let response = self
      .app
      .client
      .post(format!("{}{}", self.app.address, action))
      .form(&[(email_name.as_str(), email), (password_name.as_str(), password)])
      .send()
      .await?;

    Screen::from_response(response).await
  }
}

/// Page object for the home screen
pub struct HomePage {
  screen: Screen,
}

impl HomePage {
  pub const HOME_TITLE: &'static str = "home_title";

  /// Succeeds only if `screen` shows the home title marker
  pub fn from_screen(screen: Screen) -> anyhow::Result<Self> {
    if !screen.has_element(Self::HOME_TITLE) {
      bail!("#{} not visible on {}", Self::HOME_TITLE, screen.url);
    }
    Ok(Self { screen })
  }

  pub fn url(&self) -> &reqwest::Url {
    &self.screen.url
  }
}
