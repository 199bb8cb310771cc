pub(super) fn render() {
    println!("=== Access Denied ===");
    println!("You don't have permission to access this page.");
    println!("Go back to / or logout to switch accounts.");
    println!();
}
