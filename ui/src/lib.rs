use yew::prelude::*;
use yew_router::prelude::*;

pub mod browser;
pub mod components;
pub mod config;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
pub mod state;
pub mod storage;

use components::MainLayout;
use contexts::ConfirmProvider;
use pages::{NotFoundPage, SectionPage};

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ConfirmProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </ConfirmProvider>
        </BrowserRouter>
    }
}

/// Dashboard routes. Paths match the links in `menu.json`.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/members")]
    Members,
    #[at("/events")]
    Events,

    #[at("/referralReport")]
    ReferralReport,
    #[at("/referralReport/:id")]
    ReferralReportDetail { id: String },
    #[at("/testimonialReport")]
    TestimonialReport,
    #[at("/oneTooneReport")]
    OneToOneReport,
    #[at("/tyfcb")]
    Tyfcb,
    #[at("/VisitorsReport")]
    VisitorsReport,
    #[at("/askManagement")]
    AskManagement,
    #[at("/pointHistory")]
    PointHistory,
    #[at("/attendanceRecord")]
    AttendanceRecord,
    #[at("/taskHistory")]
    TaskHistory,
    #[at("/fees")]
    Fees,

    #[at("/country")]
    Country,
    #[at("/country/:id")]
    CountryDetail { id: String },
    #[at("/states")]
    States,
    #[at("/city")]
    City,
    #[at("/chapter")]
    Chapter,
    #[at("/category")]
    Category,
    #[at("/subcategory")]
    Subcategory,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Members => "Members",
            Route::Events => "Events",
            Route::ReferralReport | Route::ReferralReportDetail { .. } => {
                "Referral Report"
            }
            Route::TestimonialReport => "Testimonial Report",
            Route::OneToOneReport => "One to One Report",
            Route::Tyfcb => "TYFCB",
            Route::VisitorsReport => "Visitors Report",
            Route::AskManagement => "Ask Management",
            Route::PointHistory => "Point History",
            Route::AttendanceRecord => "Attendance Record",
            Route::TaskHistory => "Task History",
            Route::Fees => "Fees",
            Route::Country | Route::CountryDetail { .. } => "Country",
            Route::States => "States",
            Route::City => "City",
            Route::Chapter => "Chapter",
            Route::Category => "Category",
            Route::Subcategory => "Subcategory",
            Route::NotFound => "Not found",
        }
    }
}

fn switch(route: Route) -> Html {
    match &route {
        Route::NotFound => html! { <NotFoundPage /> },
        Route::ReferralReportDetail { id } | Route::CountryDetail { id } => {
            html! {
                <SectionPage
                    title={route.title()}
                    detail={AttrValue::from(id.clone())}
                />
            }
        }
        _ => html! { <SectionPage title={route.title()} /> },
    }
}
