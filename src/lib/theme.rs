//! Shared UI themes and Tailwind class constants to ensure visual consistency
//! across the application.

pub struct Theme;

impl Theme {
    /// Card container used for asset, collection, and club tiles.
    pub const CARD: &'static str = "bg-white dark:bg-gray-800 rounded-lg overflow-hidden border border-gray-200 dark:border-gray-700 hover:shadow-lg transition-all group";

    /// Standard text input used across forms.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

    /// Form label paired with `INPUT`.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Section heading inside a page.
    pub const SECTION_TITLE: &'static str = "text-xl font-semibold text-gray-900 dark:text-white";
}
