//! File-backed vehicle catalog

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use fuelcost_domain::model::Vehicle;
use fuelcost_domain::repository::VehicleRepository;
use fuelcost_types::{CatalogError, Result};

use crate::record::{parse_records, serialize_records};

/// What happened while loading a catalog
#[derive(Debug)]
pub struct LoadReport {
    /// Set when the store could not be read; the catalog starts empty
    pub unavailable: Option<CatalogError>,
    /// Records that were skipped (malformed lines, repeated names)
    pub skipped: Vec<CatalogError>,
    pub loaded: usize,
}

impl LoadReport {
    pub fn store_found(&self) -> bool {
        self.unavailable.is_none()
    }

    pub fn is_clean(&self) -> bool {
        self.unavailable.is_none() && self.skipped.is_empty()
    }
}

/// Ordered collection of vehicles backed by a `name,efficiency` file
///
/// Names are unique under case-insensitive comparison. Every successful
/// [`add`](Self::add) rewrites the whole file; the in-memory list only changes
/// once the write has succeeded.
#[derive(Debug)]
pub struct VehicleCatalog {
    store_path: PathBuf,
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    /// Load a catalog from `store_path`
    ///
    /// A store that cannot be read yields an empty catalog. Malformed lines
    /// and repeated names are skipped and listed in the returned report;
    /// the first occurrence of a name wins.
    pub fn load(store_path: impl Into<PathBuf>) -> (Self, LoadReport) {
        let store_path = store_path.into();

        let content = match fs::read(&store_path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                let report = LoadReport {
                    unavailable: Some(CatalogError::StoreUnavailable(format!(
                        "{}: {}",
                        store_path.display(),
                        e
                    ))),
                    skipped: Vec::new(),
                    loaded: 0,
                };
                return (Self::empty(store_path), report);
            }
        };

        let (parsed, mut skipped) = parse_records(&content);
        let mut vehicles: Vec<Vehicle> = Vec::with_capacity(parsed.len());
        for vehicle in parsed {
            if vehicles.iter().any(|v| v.matches_name(vehicle.name())) {
                skipped.push(CatalogError::DuplicateName(vehicle.name().to_string()));
            } else {
                vehicles.push(vehicle);
            }
        }

        let report = LoadReport {
            unavailable: None,
            skipped,
            loaded: vehicles.len(),
        };
        (
            Self {
                store_path,
                vehicles,
            },
            report,
        )
    }

    /// An empty catalog that will write to `store_path` on first add
    pub fn empty(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
            vehicles: Vec::new(),
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Append a vehicle and rewrite the store
    pub fn add(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.get(vehicle.name()).is_some() {
            return Err(CatalogError::DuplicateName(vehicle.name().to_string()).into());
        }

        let mut updated = self.vehicles.clone();
        updated.push(vehicle);
        self.persist(&updated)?;
        self.vehicles = updated;
        Ok(())
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.matches_name(name))
    }

    /// All vehicles in insertion order
    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Write `vehicles` to a temp file beside the store, then rename it over the store
    ///
    /// A missing store is first created empty so it gets the default file mode.
    fn persist(&self, vehicles: &[Vehicle]) -> Result<()> {
        let write = || -> std::io::Result<()> {
            let dir = match self.store_path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            fs::create_dir_all(dir)?;

            // Temp files are owner-only; the store keeps its own mode across rewrites
            let permissions = match fs::metadata(&self.store_path) {
                Ok(metadata) => metadata.permissions(),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    File::create(&self.store_path)?.metadata()?.permissions()
                }
                Err(e) => return Err(e),
            };

            let mut file = NamedTempFile::new_in(dir)?;
            file.write_all(serialize_records(vehicles).as_bytes())?;
            file.as_file().sync_all()?;
            file.as_file().set_permissions(permissions)?;
            file.persist(&self.store_path).map_err(|e| e.error)?;
            Ok(())
        };

        write().map_err(|e| {
            CatalogError::StoreWrite(format!("{}: {}", self.store_path.display(), e)).into()
        })
    }
}

impl VehicleRepository for VehicleCatalog {
    fn save(&mut self, vehicle: Vehicle) -> Result<()> {
        self.add(vehicle)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Vehicle>> {
        Ok(self.get(name).cloned())
    }

    fn find_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.vehicles.clone())
    }
}
