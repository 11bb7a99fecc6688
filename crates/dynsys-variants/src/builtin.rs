#![forbid(unsafe_code)]

//! Built-in variant dictionaries.
//!
//! Rows are `(key, canonical, alternatives)`. The canonical value is what the
//! unscrambled pages render; alternatives are swapped in for other seeds.

use std::sync::OnceLock;

use crate::catalog::VariantCatalog;

type Row = (&'static str, &'static str, &'static [&'static str]);

/// Element identifiers.
pub const ID_ROWS: &[Row] = &[
    ("search-input", "search-input", &["query-field", "search-box", "find-input", "lookup-field"]),
    ("search-button", "search-button", &["search-submit", "find-btn", "query-go", "lookup-btn"]),
    ("nav-bar", "nav-bar", &["top-nav", "main-navigation", "site-header-nav", "primary-menu"]),
    ("login-button", "login-button", &["sign-in-btn", "auth-login", "account-enter", "user-login"]),
    ("logout-button", "logout-button", &["sign-out-btn", "auth-logout", "account-exit", "user-logout"]),
    ("footer", "footer", &["site-footer", "page-bottom", "footer-area", "bottom-section"]),
    ("filter-panel", "filter-panel", &["filters", "refine-panel", "facet-box", "narrow-results"]),
    ("pagination-next", "pagination-next", &["next-page", "page-forward", "more-results", "pager-next"]),
    ("pagination-prev", "pagination-prev", &["prev-page", "page-back", "fewer-results", "pager-prev"]),
    // cart
    ("cart-page", "cart-page", &["basket-view", "shopping-cart", "bag-page", "order-summary"]),
    ("cart-item-card", "cart-item-card", &["basket-item", "cart-line", "bag-entry", "order-row"]),
    ("add-to-cart-button", "add-to-cart-button", &["add-basket-btn", "buy-add", "cart-add", "bag-add"]),
    ("checkout-button", "checkout-button", &["proceed-pay", "checkout-go", "place-order", "pay-now"]),
    ("remove-item-button", "remove-item-button", &["delete-line", "cart-remove", "drop-item", "bag-remove"]),
    ("quantity-input", "quantity-input", &["qty-field", "amount-input", "item-count", "units-box"]),
    // booking
    ("booking-form", "booking-form", &["reservation-form", "table-request", "book-panel", "reserve-sheet"]),
    ("reserve-button", "reserve-button", &["book-table", "confirm-booking", "reserve-now", "hold-table"]),
    ("restaurant-card", "restaurant-card", &["venue-card", "dining-tile", "eatery-item", "place-card"]),
    ("date-picker", "date-picker", &["calendar-input", "day-select", "date-field", "when-picker"]),
    ("party-size-select", "party-size-select", &["guests-select", "people-count", "group-size", "seats-picker"]),
    // email
    ("email-list", "email-list", &["inbox-list", "message-list", "mail-items", "thread-list"]),
    ("compose-button", "compose-button", &["new-message", "write-mail", "draft-new", "mail-create"]),
    ("inbox-link", "inbox-link", &["mailbox-link", "inbox-nav", "received-link", "all-mail"]),
    ("email-subject-input", "email-subject-input", &["subject-field", "mail-title", "topic-input", "headline-box"]),
    ("send-button", "send-button", &["dispatch-mail", "send-now", "mail-send", "deliver-btn"]),
    // lodging
    ("listing-card", "listing-card", &["stay-card", "property-tile", "home-item", "rental-card"]),
    ("book-now-button", "book-now-button", &["reserve-stay", "instant-book", "stay-book", "confirm-stay"]),
    ("guest-selector", "guest-selector", &["guests-picker", "occupants", "travellers", "stay-guests"]),
    // social
    ("post-card", "post-card", &["feed-item", "status-card", "update-tile", "story-entry"]),
    ("like-button", "like-button", &["react-btn", "heart-toggle", "appreciate", "thumb-up"]),
    ("follow-button", "follow-button", &["subscribe-user", "connect-btn", "track-profile", "add-friend"]),
    ("comment-input", "comment-input", &["reply-field", "comment-box", "respond-input", "note-field"]),
    // stats
    ("stats-card", "stats-card", &["metric-tile", "kpi-box", "figure-card", "summary-stat"]),
    ("validator-table", "validator-table", &["validators-grid", "node-table", "operator-list", "staker-table"]),
    ("block-table", "block-table", &["blocks-grid", "chain-table", "height-list", "ledger-rows"]),
];

/// CSS class bundles.
pub const CLASS_ROWS: &[Row] = &[
    ("search-input", "search-input", &["form-control query", "input-search field", "searchbox txt", "finder-input"]),
    ("search-button", "btn btn-primary", &["button primary-action", "btn-search cta", "action-btn main", "submit-btn"]),
    ("container", "container", &["wrapper", "page-shell", "content-frame", "layout-root"]),
    ("card", "card", &["panel", "tile", "box-item", "surface"]),
    ("button-primary", "btn btn-primary", &["button button-main", "cta-button", "action primary", "btn-main solid"]),
    ("button-secondary", "btn btn-secondary", &["button button-alt", "ghost-button", "action secondary", "btn-alt outline"]),
    ("grid", "grid", &["grid-layout", "tiles", "mosaic", "matrix"]),
    ("list", "list", &["list-group", "items", "stack-list", "entries"]),
    ("header", "header", &["page-header", "top-bar", "masthead", "banner"]),
    ("footer", "footer", &["page-footer", "bottom-bar", "colophon", "site-end"]),
    ("sidebar", "sidebar", &["side-panel", "aside-nav", "rail", "drawer"]),
    // cart
    ("cart-item-card", "cart-item card", &["basket-row panel", "line-item tile", "bag-item box", "order-line"]),
    ("checkout-button", "btn btn-success checkout", &["pay-button cta", "order-submit primary", "checkout-cta", "buy-now-btn"]),
    ("price-tag", "price", &["amount", "cost-label", "price-value", "money"]),
    // booking
    ("restaurant-card", "restaurant-card card", &["venue tile", "dining-item panel", "place box", "eatery-card"]),
    ("booking-form", "booking-form form", &["reservation panel", "book-sheet", "reserve-form card", "table-form"]),
    // email
    ("email-row", "email-row", &["mail-item", "message-row", "thread-line", "inbox-entry"]),
    ("email-unread", "email-row unread", &["mail-item is-new", "message-row bold", "thread-line fresh", "inbox-entry unseen"]),
    // lodging
    ("listing-card", "listing-card card", &["stay tile", "property panel", "home-card box", "rental-item"]),
    ("rating-badge", "rating", &["score-badge", "stars", "review-score", "rating-pill"]),
    // social
    ("post-card", "post card", &["feed-item panel", "status tile", "update box", "story-card"]),
    ("avatar", "avatar", &["profile-pic", "user-image", "face-thumb", "portrait"]),
    // stats
    ("stats-card", "stats-card card", &["metric tile", "kpi panel", "figure box", "stat-surface"]),
    ("data-table", "table", &["data-grid", "table-striped", "records", "tabular"]),
];

/// Visible text.
pub const TEXT_ROWS: &[Row] = &[
    ("search-placeholder", "Search...", &["Type to search", "Find something", "What are you looking for?", "Search here"]),
    ("search-button-label", "Search", &["Find", "Go", "Look up", "Explore"]),
    ("login-label", "Log in", &["Sign in", "Enter", "Access account", "Member login"]),
    ("logout-label", "Log out", &["Sign out", "Exit", "Leave", "End session"]),
    ("next-label", "Next", &["Forward", "More", "Continue", "Next page"]),
    ("prev-label", "Previous", &["Back", "Earlier", "Go back", "Prior page"]),
    // cart
    ("cart-title", "Shopping Cart", &["Your Basket", "Your Bag", "Cart Items", "Order Summary"]),
    ("add-to-cart-label", "Add to Cart", &["Add to Basket", "Add to Bag", "Buy", "Put in Cart"]),
    ("checkout-label", "Checkout", &["Proceed to Payment", "Place Order", "Pay Now", "Complete Purchase"]),
    ("empty-cart", "Your cart is empty", &["Nothing here yet", "No items in your basket", "Your bag is empty", "Cart has no items"]),
    // booking
    ("reserve-label", "Reserve", &["Book a Table", "Reserve Now", "Make a Reservation", "Hold My Table"]),
    ("party-size-label", "Party size", &["Guests", "Number of people", "Group size", "Diners"]),
    // email
    ("compose-label", "Compose", &["New Message", "Write", "New Email", "Create"]),
    ("inbox-label", "Inbox", &["Mailbox", "Received", "All Mail", "Messages"]),
    ("send-label", "Send", &["Send Now", "Deliver", "Dispatch", "Send Message"]),
    // lodging
    ("book-now-label", "Book now", &["Reserve stay", "Instant book", "Confirm booking", "Book this place"]),
    ("guests-label", "Guests", &["Travellers", "Occupants", "Visitors", "People"]),
    // social
    ("like-label", "Like", &["Love", "Appreciate", "React", "Thumbs up"]),
    ("follow-label", "Follow", &["Subscribe", "Connect", "Track", "Add"]),
    ("comment-placeholder", "Write a comment...", &["Add a reply...", "Say something...", "Leave a note...", "Your thoughts..."]),
    // stats
    ("stats-title", "Network Statistics", &["Chain Overview", "Network Metrics", "Live Stats", "Dashboard"]),
    ("validators-label", "Validators", &["Nodes", "Operators", "Stakers", "Block producers"]),
    ("blocks-label", "Latest Blocks", &["Recent Blocks", "New Blocks", "Block Feed", "Chain Activity"]),
];

static IDS: OnceLock<VariantCatalog> = OnceLock::new();
static CLASSES: OnceLock<VariantCatalog> = OnceLock::new();
static TEXTS: OnceLock<VariantCatalog> = OnceLock::new();

/// Built-in identifier dictionary.
pub fn ids() -> &'static VariantCatalog {
    IDS.get_or_init(|| VariantCatalog::from_rows(ID_ROWS))
}

/// Built-in class dictionary.
pub fn classes() -> &'static VariantCatalog {
    CLASSES.get_or_init(|| VariantCatalog::from_rows(CLASS_ROWS))
}

/// Built-in text dictionary.
pub fn texts() -> &'static VariantCatalog {
    TEXTS.get_or_init(|| VariantCatalog::from_rows(TEXT_ROWS))
}
