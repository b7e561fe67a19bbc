//! Home page and booking-inquiry handlers

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::booking::{submit_inquiry, InquiryForm, InquiryOutcome};
use crate::calendar::{CalendarMonth, YearMonth};
use crate::content::{lowest_nightly_rate, rooms, Room};
use crate::error::Result;
use crate::i18n::{Language, Strings};
use crate::AppState;

/// `?month=YYYY-MM&lang=xx`; unparseable values fall back to the defaults
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub month: Option<String>,
    pub lang: Option<String>,
}

impl HomeQuery {
    fn language(&self) -> Language {
        Language::from_param(self.lang.as_deref())
    }

    fn month(&self) -> Option<YearMonth> {
        self.month.as_deref().and_then(|m| m.parse().ok())
    }
}

struct LanguageLink {
    label: &'static str,
    href: String,
    active: bool,
}

/// Flash message shown above the booking form
enum Notice {
    None,
    Sent,
    Failed,
}

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    t: &'static Strings,
    lang: &'static str,
    languages: Vec<LanguageLink>,
    from_price: String,
    rooms: Vec<Room>,
    calendar: CalendarMonth,
    leading_blanks: Vec<usize>,
    previous_href: String,
    next_href: String,
    today: String,
    inquiry_action: String,
    form: InquiryForm,
    errors: Vec<String>,
    has_errors: bool,
    notice: String,
    notice_class: &'static str,
    has_notice: bool,
}

/// Home page, optionally with the calendar on another month
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>> {
    render_home(&state, &query, InquiryForm::default(), Vec::new(), Notice::None).await
}

/// Booking inquiry submission
pub async fn inquiry(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
    Form(form): Form<InquiryForm>,
) -> Result<(StatusCode, Html<String>)> {
    match submit_inquiry(&form, state.relay.as_ref(), &state.pricing).await {
        InquiryOutcome::Invalid(errors) => {
            let page = render_home(&state, &query, form, errors, Notice::None).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page))
        }
        InquiryOutcome::Sent(_) => {
            let page =
                render_home(&state, &query, InquiryForm::default(), Vec::new(), Notice::Sent)
                    .await?;
            Ok((StatusCode::OK, page))
        }
        // Keep what the visitor typed so they can resubmit
        InquiryOutcome::Failed(_) => {
            let page = render_home(&state, &query, form, Vec::new(), Notice::Failed).await?;
            Ok((StatusCode::BAD_GATEWAY, page))
        }
    }
}

async fn render_home(
    state: &AppState,
    query: &HomeQuery,
    form: InquiryForm,
    errors: Vec<String>,
    notice: Notice,
) -> Result<Html<String>> {
    let language = query.language();
    let t = language.strings();
    let today = state.today();

    let resolved = state.availability(today).await;
    let calendar = CalendarMonth::build(query.month(), today, &resolved.entries, language);

    let month_href = |month: String| format!("/?month={}&lang={}#availability", month, language.code());
    let previous_href = if calendar.has_previous() {
        month_href(calendar.previous_param())
    } else {
        String::new()
    };
    let next_href = month_href(calendar.next_param());

    let languages = Language::ALL
        .iter()
        .map(|l| LanguageLink {
            label: l.label(),
            href: format!("/?month={}&lang={}", calendar.month, l.code()),
            active: *l == language,
        })
        .collect();

    let (notice, notice_class) = match notice {
        Notice::None => (String::new(), ""),
        Notice::Sent => (t.inquiry_sent.to_string(), "notice success"),
        Notice::Failed => (t.inquiry_failed.to_string(), "notice error"),
    };

    let template = HomeTemplate {
        t,
        lang: language.code(),
        languages,
        from_price: format!("€{}", lowest_nightly_rate(&state.pricing).normalize()),
        rooms: rooms(language, &state.pricing),
        leading_blanks: (0..calendar.blank_cells).collect(),
        previous_href,
        next_href,
        today: today.to_string(),
        inquiry_action: format!("/inquiry?month={}&lang={}", calendar.month, language.code()),
        calendar,
        form,
        has_errors: !errors.is_empty(),
        errors,
        has_notice: !notice.is_empty(),
        notice,
        notice_class,
    };

    Ok(Html(template.render()?))
}
