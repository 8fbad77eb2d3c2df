mod aircraft;
mod aircraft_type;
mod flight;
