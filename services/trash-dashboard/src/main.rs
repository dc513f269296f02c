//! Trash Dashboard browser entry point

fn main() {
    trash_dashboard::mount();
}
