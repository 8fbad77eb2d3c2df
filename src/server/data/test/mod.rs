mod aircraft;
mod flight;
