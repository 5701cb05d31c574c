use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::{ACCESS_TOKEN_KEY, LOGIN_ROUTE};
use crate::forms::auth::LoginForm;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::auth::issue_access_token;

#[get("/login")]
pub async fn show_login(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "login");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/login")]
pub async fn login(
    session: Session,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let token = match issue_access_token(&form) {
        Ok(token) => token,
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            return redirect(LOGIN_ROUTE);
        }
        Err(err) => {
            log::error!("Failed to issue access token: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    if let Err(err) = session.insert(ACCESS_TOKEN_KEY, token) {
        log::error!("Failed to store access token in session: {err}");
        return HttpResponse::InternalServerError().finish();
    }

    FlashMessage::success("Đăng nhập thành công.".to_string()).send();
    redirect("/")
}

#[post("/logout")]
pub async fn logout(session: Session) -> impl Responder {
    session.purge();
    redirect(LOGIN_ROUTE)
}
