// Domain constants shared by the calculators and every front-end.

// Calendar
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const DAYS_PER_WEEK: f64 = 7.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
pub const GRAMS_PER_KG: f64 = 1000.0;

// Input bound: keeps every annualised product finite and every count within u64
pub const MAX_FIELD_VALUE: f64 = 1.0e9;

// Presentation
pub const CURRENCY_SYMBOL: &str = "₹";
pub const SAVINGS_FRACTION: f64 = 0.10; // flat reduction used for the savings estimate

// Carbon emission factors (kg CO2e per unit)
pub const CARBON_KG_PER_KWH: f64 = 0.418;
pub const CARBON_KG_PER_THERM: f64 = 5.3;
pub const CARBON_KG_PER_MILE: f64 = 0.404;
pub const CARBON_KG_PER_FLIGHT: f64 = 500.0; // already annual
pub const TREE_OFFSET_KG_PER_YEAR: f64 = 22.0; // absorbed by one mature tree
pub const GLOBAL_AVERAGE_KG_PER_YEAR: f64 = 4000.0; // per person

// Carbon banding (kg CO2e per year)
pub const CARBON_AVERAGE_ABOVE: f64 = 2000.0;
pub const CARBON_HIGH_ABOVE: f64 = 5000.0;

// Electricity
pub const DEFAULT_ELEC_COST_PER_KWH: f64 = 8.0;
pub const DEFAULT_PEOPLE_IN_HOUSEHOLD: f64 = 1.0;
pub const AC_POWER_KW: f64 = 1.5; // typical split unit
pub const FRIDGE_KWH_PER_DAY: f64 = 1.2;
pub const WASHING_MACHINE_KWH_PER_LOAD: f64 = 0.5;
pub const TV_POWER_KW: f64 = 0.1;
pub const GRID_CARBON_KG_PER_KWH: f64 = 0.8;
pub const ELEC_MODERATE_ABOVE_KWH: f64 = 5000.0;
pub const ELEC_HIGH_ABOVE_KWH: f64 = 10000.0;

// Water
pub const DEFAULT_WATER_COST_PER_LITER: f64 = 0.05;
pub const SHOWER_LITERS_PER_MINUTE: f64 = 9.5;
pub const WASHING_MACHINE_LITERS_PER_LOAD: f64 = 60.0;
pub const DISHWASHER_LITERS_PER_LOAD: f64 = 12.0;
pub const GARDEN_LITERS_PER_HOUR: f64 = 750.0;
pub const HEATED_WATER_FRACTION: f64 = 0.5;
pub const HEATING_KWH_PER_LITER: f64 = 0.035;
pub const TREATMENT_CARBON_KG_PER_LITER: f64 = 0.00003;
pub const WATER_MODERATE_ABOVE_LITERS: f64 = 50000.0;
pub const WATER_HIGH_ABOVE_LITERS: f64 = 100000.0;

// Plastic unit weights (kg per item)
pub const BOTTLE_KG: f64 = 0.02;
pub const BAG_KG: f64 = 0.005;
pub const STRAW_KG: f64 = 0.002;
pub const CUTLERY_KG: f64 = 0.005;
pub const CONTAINER_KG: f64 = 0.03;
pub const STANDARD_BOTTLE_KG: f64 = 0.02; // ocean-impact equivalent
pub const AVERAGE_BAGS_PER_YEAR: f64 = 300.0;
pub const MICROPLASTIC_CONVERSION_FACTOR: f64 = 0.005;
pub const RECYCLING_RATE_MIN_PERCENT: f64 = 20.0;
pub const RECYCLING_RATE_SPAN_PERCENT: f64 = 20.0;
pub const PLASTIC_MODERATE_ABOVE_KG: f64 = 10.0;
pub const PLASTIC_HIGH_ABOVE_KG: f64 = 20.0;
