//! Command handlers

use std::path::{Path, PathBuf};

use garage_app::app::VehicleService;
use garage_app::config::Config;
use garage_app::repository::open_vehicle_service;
use garage_domain::model::{
    CarDetails, MotorcycleDetails, TruckDetails, Vehicle, VehicleKind,
};
use garage_infra::persistence::FileVehicleRepository;
use garage_types::{Category, Error, OutputFormat, Result};

use crate::cli::{CommonArgs, CommonPatch, Commands, NewVehicle, VehiclePatch};
use crate::output::{output_vehicle, output_vehicles};
use crate::shell;

/// Everything a command needs, built once at start-up
pub struct Context {
    pub config: Config,
    pub service: VehicleService<FileVehicleRepository>,
}

/// Load config, apply CLI overrides, open the data directory
pub fn bootstrap(data_dir: Option<&Path>, format: Option<OutputFormat>) -> Result<Context> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(data_dir) = data_dir {
        config.data_dir = Some(data_dir.to_path_buf());
    }
    if let Some(format) = format {
        config.output_format = format;
    }

    let service = open_vehicle_service(&config)?;
    log::debug!("Using data directory {}", config.data_dir().display());
    Ok(Context { config, service })
}

/// Execute CLI command
pub fn execute(ctx: &Context, command: Commands, format: OutputFormat) -> Result<()> {
    let service = &ctx.service;

    match command {
        Commands::Create { vehicle } => {
            let vehicle = new_vehicle(service, vehicle)?;
            let vehicle = service.create(&vehicle)?;
            println!("Created {} {}", vehicle.category(), vehicle.id);
            output_vehicle(format, &vehicle)?;
        }

        Commands::Get { category, id } => {
            let vehicle = service.get(id, &category)?;
            output_vehicle(format, &vehicle)?;
        }

        Commands::Update { vehicle } => {
            let (id, category) = patch_target(&vehicle);
            let current = service.get(id, category.key())?;
            let updated = apply_patch(current, vehicle)?;
            let updated = service.update(&updated)?;
            println!("Updated {} {}", updated.category(), updated.id);
            output_vehicle(format, &updated)?;
        }

        Commands::Delete { category, id } => {
            service.delete(id, &category)?;
            println!("Deleted {} {}", Category::parse(&category)?, id);
        }

        Commands::List { category } => {
            let vehicles = service.list_all(&category)?;
            output_vehicles(format, "Total", &vehicles)?;
        }

        Commands::Search { category, brand } => {
            let vehicles = service.search_by_brand(&brand, &category)?;
            output_vehicles(format, "Matches", &vehicles)?;
        }

        Commands::NextId { category } => {
            println!("{}", service.next_id(&category)?);
        }

        Commands::Config {
            show,
            set_data_dir,
            set_output,
            reset,
        } => configure(show, set_data_dir, set_output, reset)?,

        Commands::Shell => shell::run(ctx)?,
    }

    Ok(())
}

/// Handle `config` against the user config file. Never opens the data
/// directory, so a bad `data_dir` can still be repaired.
pub fn configure(
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    configure_at(&Config::config_path()?, show, set_data_dir, set_output, reset)?;
    Ok(())
}

fn configure_at(
    path: &Path,
    show: bool,
    set_data_dir: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<Config> {
    // Work on the stored file, not on the CLI-overridden copy. A reset does
    // not read it at all, so an unreadable file can be replaced.
    let mut config = if reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults");
        config
    } else {
        Config::load_from(path)?
    };

    let mut changed = false;
    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        changed = true;
    }
    if let Some(output_format) = set_output {
        config.output_format = output_format;
        changed = true;
    }

    if changed {
        config.save_to(path)?;
        println!("Configuration saved");
    }

    if show || (!changed && !reset) {
        print!("{}", config);
    }
    Ok(config)
}

/// Build a vehicle from creation arguments, assigning the next free ID if none was given
fn new_vehicle(service: &VehicleService<FileVehicleRepository>, args: NewVehicle) -> Result<Vehicle> {
    let (common, kind) = match args {
        NewVehicle::Auto {
            common,
            doors,
            transmission,
            sedan,
        } => (
            common,
            VehicleKind::Car(CarDetails {
                doors,
                transmission,
                sedan,
            }),
        ),
        NewVehicle::Moto {
            common,
            displacement,
            fairing,
        } => (
            common,
            VehicleKind::Motorcycle(MotorcycleDetails {
                displacement_cc: displacement,
                has_fairing: fairing,
            }),
        ),
        NewVehicle::Camion {
            common,
            capacity,
            axles,
        } => (
            common,
            VehicleKind::Truck(TruckDetails {
                load_capacity_tons: capacity,
                axles,
            }),
        ),
    };

    let CommonArgs {
        id,
        brand,
        model,
        year,
        price,
        color,
    } = common;
    let id = match id {
        Some(id) => id,
        None => service.next_id(kind.category().key())?,
    };

    Ok(Vehicle::new(id, brand, model, year, price, color, kind))
}

fn patch_target(patch: &VehiclePatch) -> (i32, Category) {
    match patch {
        VehiclePatch::Auto { id, .. } => (*id, Category::Car),
        VehiclePatch::Moto { id, .. } => (*id, Category::Motorcycle),
        VehiclePatch::Camion { id, .. } => (*id, Category::Truck),
    }
}

fn apply_common(vehicle: &mut Vehicle, patch: CommonPatch) {
    if let Some(brand) = patch.brand {
        vehicle.brand = brand;
    }
    if let Some(model) = patch.model {
        vehicle.model = model;
    }
    if let Some(year) = patch.year {
        vehicle.year = year;
    }
    if let Some(price) = patch.price {
        vehicle.price = price;
    }
    if let Some(color) = patch.color {
        vehicle.color = color;
    }
}

/// Overwrite the fields given on the command line
pub fn apply_patch(mut vehicle: Vehicle, patch: VehiclePatch) -> Result<Vehicle> {
    let stored = vehicle.category();
    match patch {
        VehiclePatch::Auto {
            common,
            doors,
            transmission,
            sedan,
            ..
        } => {
            let VehicleKind::Car(car) = &mut vehicle.kind else {
                return Err(category_mismatch(Category::Car, stored));
            };
            if let Some(doors) = doors {
                car.doors = doors;
            }
            if let Some(transmission) = transmission {
                car.transmission = transmission;
            }
            if let Some(sedan) = sedan {
                car.sedan = sedan;
            }
            apply_common(&mut vehicle, common);
        }
        VehiclePatch::Moto {
            common,
            displacement,
            fairing,
            ..
        } => {
            let VehicleKind::Motorcycle(moto) = &mut vehicle.kind else {
                return Err(category_mismatch(Category::Motorcycle, stored));
            };
            if let Some(displacement) = displacement {
                moto.displacement_cc = displacement;
            }
            if let Some(fairing) = fairing {
                moto.has_fairing = fairing;
            }
            apply_common(&mut vehicle, common);
        }
        VehiclePatch::Camion {
            common,
            capacity,
            axles,
            ..
        } => {
            let VehicleKind::Truck(truck) = &mut vehicle.kind else {
                return Err(category_mismatch(Category::Truck, stored));
            };
            if let Some(capacity) = capacity {
                truck.load_capacity_tons = capacity;
            }
            if let Some(axles) = axles {
                truck.axles = axles;
            }
            apply_common(&mut vehicle, common);
        }
    }
    Ok(vehicle)
}

fn category_mismatch(requested: Category, stored: Category) -> Error {
    Error::InvalidArgument(format!(
        "Cannot apply {} changes to a {}",
        requested, stored
    ))
}
