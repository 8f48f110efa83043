pub fn print_help() {
    println!("parkplan - plan your park day in plain text");
    println!("\nType an activity to add it to the plan. Times can lead or trail:");
    println!("  9am Rope drop at Space Mountain");
    println!("  Haunted Mansion 2:30pm");
    println!("  1800 Dinner at Be Our Guest");
    println!("  Fantasmic! 7pm-8pm");

    println!("\nCommands:");
    println!("  list              Show the plan");
    println!("  waits             Show wait times for the park");
    println!("  reservations      Show how soon each timed item starts");
    println!("  remove <id>       Remove an item (a unique id prefix is enough)");
    println!("  clear             Remove every item");
    println!("  help              Show this help");
    println!("  exit, quit        Leave parkplan");

    println!("\nEverything else (editing, importing, settings) is available as");
    println!("'parkplan <command>' from the shell; see 'parkplan --help'.");
}
