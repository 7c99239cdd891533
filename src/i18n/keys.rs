//! Known translation keys
//!
//! Every key the front-end looks up. The catalog is checked against [`ALL`]
//! when it is loaded, so a missing string is reported at startup instead of
//! showing up as a raw key on a page.

pub const NAV_HOME: &str = "nav.home";
pub const NAV_MEDICINES: &str = "nav.medicines";
pub const NAV_ORDERS: &str = "nav.orders";
pub const NAV_CONSULTATION: &str = "nav.consultation";
pub const NAV_LOGIN: &str = "nav.login";
pub const NAV_LOGOUT: &str = "nav.logout";

pub const FOOTER_ABOUT: &str = "footer.about";
pub const FOOTER_CONTACTS: &str = "footer.contacts";
pub const FOOTER_CONSULTATION: &str = "footer.consultation";
pub const FOOTER_PRIVACY: &str = "footer.privacy";
/// Params: `year`
pub const FOOTER_RIGHTS: &str = "footer.rights";

pub const LANGUAGE_LABEL: &str = "language.label";
pub const LANGUAGE_SELECT: &str = "language.select";

pub const LOGIN_TITLE: &str = "login.title";
pub const LOGIN_EMAIL: &str = "login.email";
pub const LOGIN_PASSWORD: &str = "login.password";
pub const LOGIN_SUBMIT: &str = "login.submit";
pub const LOGIN_ERROR: &str = "login.error";
/// Params: `name`
pub const LOGIN_WELCOME: &str = "login.welcome";

pub const NOT_FOUND_TITLE: &str = "notFound.title";
pub const NOT_FOUND_MESSAGE: &str = "notFound.message";
pub const NOT_FOUND_BACK_HOME: &str = "notFound.backHome";

pub const CONSULTATION_TITLE: &str = "consultation.title";
/// Params: `name`
pub const CONSULTATION_GREETING: &str = "consultation.greeting";
pub const CONSULTATION_PLACEHOLDER: &str = "consultation.placeholder";
pub const CONSULTATION_SEND: &str = "consultation.send";
pub const CONSULTATION_DISCLAIMER: &str = "consultation.disclaimer";

pub const ORDERS_TITLE: &str = "orders.title";
pub const ORDERS_EMPTY: &str = "orders.empty";
/// Params: `amount`, `currency`
pub const ORDERS_TOTAL: &str = "orders.total";
/// Params: `count`
pub const ORDERS_ITEM_COUNT: &str = "orders.itemCount";
pub const ORDERS_STATUS_PENDING: &str = "orders.status.pending";
pub const ORDERS_STATUS_PROCESSING: &str = "orders.status.processing";
pub const ORDERS_STATUS_DELIVERED: &str = "orders.status.delivered";
pub const ORDERS_STATUS_CANCELLED: &str = "orders.status.cancelled";

pub const MEDICINES_SEARCH: &str = "medicines.search";
pub const MEDICINES_PRESCRIPTION_REQUIRED: &str = "medicines.prescriptionRequired";
pub const MEDICINES_IN_STOCK: &str = "medicines.inStock";
pub const MEDICINES_OUT_OF_STOCK: &str = "medicines.outOfStock";
pub const MEDICINES_ADD_TO_CART: &str = "medicines.addToCart";

pub const ALL: &[&str] = &[
    NAV_HOME,
    NAV_MEDICINES,
    NAV_ORDERS,
    NAV_CONSULTATION,
    NAV_LOGIN,
    NAV_LOGOUT,
    FOOTER_ABOUT,
    FOOTER_CONTACTS,
    FOOTER_CONSULTATION,
    FOOTER_PRIVACY,
    FOOTER_RIGHTS,
    LANGUAGE_LABEL,
    LANGUAGE_SELECT,
    LOGIN_TITLE,
    LOGIN_EMAIL,
    LOGIN_PASSWORD,
    LOGIN_SUBMIT,
    LOGIN_ERROR,
    LOGIN_WELCOME,
    NOT_FOUND_TITLE,
    NOT_FOUND_MESSAGE,
    NOT_FOUND_BACK_HOME,
    CONSULTATION_TITLE,
    CONSULTATION_GREETING,
    CONSULTATION_PLACEHOLDER,
    CONSULTATION_SEND,
    CONSULTATION_DISCLAIMER,
    ORDERS_TITLE,
    ORDERS_EMPTY,
    ORDERS_TOTAL,
    ORDERS_ITEM_COUNT,
    ORDERS_STATUS_PENDING,
    ORDERS_STATUS_PROCESSING,
    ORDERS_STATUS_DELIVERED,
    ORDERS_STATUS_CANCELLED,
    MEDICINES_SEARCH,
    MEDICINES_PRESCRIPTION_REQUIRED,
    MEDICINES_IN_STOCK,
    MEDICINES_OUT_OF_STOCK,
    MEDICINES_ADD_TO_CART,
];
