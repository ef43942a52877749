use log::{error, info};
use nucdata::data::reference_data;
use nucdata::stream::MassStream;

fn main() {
    env_logger::init();

    // Same nuclides named in different ways
    for id in ["O16", "U-235", "am242m", "952421"] {
        match nucdata::nuc_weight(id) {
            Ok(w) => println!("{id:>8}: {w} amu"),
            Err(e) => error!("{e}"),
        }
    }

    for id in [10010, 491150, 621490] {
        match (nucdata::b_coherent(id), nucdata::b_incoherent(id), nucdata::b(id)) {
            (Ok(bc), Ok(bi), Ok(b)) => println!("{id:>8}: b_c = {bc} b_i = {bi} b = {b} cm"),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => error!("{e}"),
        }
    }

    // Fuel with a typo in one of the nuclides, which is skipped with a warning
    let fuel = "U235 0.045 U238 0.955 Pu239 0.01 Sm149 0.001 Xy12 0.3";
    let fuel = match MassStream::from_reader(fuel.as_bytes(), 1000.0, "fuel") {
        Ok(ms) => ms,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    info!("Loaded {} nuclides", fuel.comp().len());

    print!("{fuel}");
    match fuel.atomic_weight(reference_data()) {
        Ok(a) => println!("Mean atomic weight: {a}"),
        Err(e) => error!("{e}"),
    }
    print!("{}", fuel.get_u("Uranium"));
}
