pub mod ask;
pub mod copy;
pub mod list;
pub mod pick;
pub mod show;
pub mod theme;
