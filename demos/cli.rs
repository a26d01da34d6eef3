use resource_path::{Resource, RoutingConfig};

pub fn main() -> Result<(), resource_path::Error> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_default();

    let resource = match args.next() {
        Some(name) => Resource::from_segments(&path, &name)?,
        None => Resource::from_path(&path),
    };

    println!("resource: {:#?}", resource);
    println!("\ncanonical: {:?}", resource.to_string());

    for case_sensitive in [false, true] {
        for strict in [false, true] {
            let routing = RoutingConfig::new()
                .case_sensitive(case_sensitive)
                .strict(strict);
            println!(
                "case sensitive: {:<5}  strict: {:<5}  path: {:?}  collection: {:?}",
                case_sensitive,
                strict,
                resource.value_of(Some(&routing), false),
                resource.value_of(Some(&routing), true),
            );
        }
    }

    println!("\n{}", resource.to_json()?);

    Ok(())
}
