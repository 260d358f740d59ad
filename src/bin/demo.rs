use log::trace;
use probetable::{DemoError, scenario};

fn main() -> Result<(), DemoError> {
    env_logger::builder().init();

    let capacity = scenario::parse_capacity(std::env::args().nth(1))?;
    trace!("capacity: {capacity}");

    let out = scenario::replay(capacity)?;

    println!("{:?}", out.table);
    println!("{}", out.greeting);
    println!("{}", out.inserted);
    println!("{}", out.removed);
    if !out.skipped.is_empty() {
        println!("no room for: {:?}", out.skipped);
    }
    Ok(())
}
