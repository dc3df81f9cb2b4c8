mod mock_clipboard;
mod mock_preference_store;
mod scripted_picker;

#[allow(unused_imports)]
pub use mock_clipboard::MockClipboard;
#[allow(unused_imports)]
pub use mock_preference_store::{FixedSystemTheme, MockPreferenceStore};
#[allow(unused_imports)]
pub use scripted_picker::ScriptedPicker;
