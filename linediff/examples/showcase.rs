use linediff::DiffReport;

fn main() {
    let original = "[server]\nhost = \"0.0.0.0\"\nport = 8080\ntimeout = 30";
    let modified = "[server]\nhost = \"127.0.0.1\"\nport = 8080\nworkers = 4";

    let report = DiffReport::new(original, modified);

    println!("{}", report.summary());
    println!();
    println!("unified:");
    print!("{}", report.render_ansi_unified());
    println!();
    println!("side by side:");
    print!("{}", report.render_ansi_side_by_side());
}
