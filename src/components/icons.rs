//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons and
//! resolves catalog [`IconRef`]s at the presentation boundary.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::IconRef;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuArrowUp as ArrowUp, LuBookOpen as BookOpen,
        LuBriefcase as Briefcase, LuCalendar as Calendar, LuChartColumn as BarChart,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuClock as Clock,
        LuCode as Code, LuEllipsis as More, LuExternalLink as ExternalLink,
        LuFileText as FileText, LuGithub as Github, LuHouse as Home, LuLinkedin as Linkedin,
        LuMail as Mail, LuMenu as Menu, LuMessageSquare as MessageSquare,
        LuTriangleAlert as AlertTriangle, LuTrophy as Trophy, LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsArrowUp as ArrowUp, BsBarChart as BarChart,
        BsBook as BookOpen, BsBoxArrowUpRight as ExternalLink, BsBriefcase as Briefcase,
        BsCalendar as Calendar, BsChatSquare as MessageSquare, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsClock as Clock, BsCodeSlash as Code,
        BsEnvelope as Mail, BsExclamationTriangle as AlertTriangle,
        BsFileEarmarkText as FileText, BsGithub as Github, BsHouseFill as Home,
        BsLinkedin as Linkedin, BsList as Menu, BsPerson as User, BsThreeDots as More,
        BsTrophy as Trophy, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Chrome
themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(MENU, Menu);
themed_icon!(MORE, More);

// Catalog
themed_icon!(HOME, Home);
themed_icon!(USER, User);
themed_icon!(BRIEFCASE, Briefcase);
themed_icon!(CLOCK, Clock);
themed_icon!(BAR_CHART, BarChart);
themed_icon!(BOOK_OPEN, BookOpen);
themed_icon!(CODE, Code);
themed_icon!(MESSAGE_SQUARE, MessageSquare);
themed_icon!(CALENDAR, Calendar);
themed_icon!(TROPHY, Trophy);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(ALERT_TRIANGLE, AlertTriangle);
themed_icon!(GITHUB, Github);
themed_icon!(LINKEDIN, Linkedin);
themed_icon!(MAIL, Mail);

/// Resolve a symbolic icon reference to the themed icon.
pub fn resolve(icon: IconRef) -> Icon {
    match icon {
        IconRef::Home => HOME,
        IconRef::User => USER,
        IconRef::Briefcase => BRIEFCASE,
        IconRef::Clock => CLOCK,
        IconRef::BarChart => BAR_CHART,
        IconRef::BookOpen => BOOK_OPEN,
        IconRef::Code => CODE,
        IconRef::MessageSquare => MESSAGE_SQUARE,
        IconRef::Calendar => CALENDAR,
        IconRef::Trophy => TROPHY,
        IconRef::FileText => FILE_TEXT,
        IconRef::AlertTriangle => ALERT_TRIANGLE,
        IconRef::Github => GITHUB,
        IconRef::Linkedin => LINKEDIN,
        IconRef::Mail => MAIL,
    }
}
