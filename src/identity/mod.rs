pub mod descriptor;
pub mod slug;
