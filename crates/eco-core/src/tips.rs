use rand::Rng;

pub const CARBON_TIPS: &[&str] = &[
    "Use public transportation or bike more.",
    "Switch to renewable energy sources.",
    "Improve home energy efficiency.",
    "Consider an electric vehicle.",
];

pub const ELECTRICITY_TIPS: &[&str] = &[
    "Switch to LED lighting throughout your home.",
    "Unplug electronics when not in use (phantom load).",
    "Use energy-efficient appliances (Energy Star rated).",
    "Optimize your thermostat settings for heating and cooling.",
    "Seal drafts around windows and doors.",
    "Insulate your home properly to reduce energy loss.",
    "Utilize natural light during the day.",
    "Wash clothes in cold water.",
    "Air dry clothes when possible.",
    "Regularly clean or replace HVAC filters.",
    "Explore smart home devices for energy management.",
    "Get a home energy audit to identify inefficiencies.",
];

pub const WATER_TIPS: &[&str] = &[
    "Take shorter showers.",
    "Turn off the tap while brushing teeth or washing dishes.",
    "Fix leaky faucets and running toilets promptly.",
    "Only run washing machines and dishwashers with full loads.",
    "Install low-flow showerheads and aerators on faucets.",
    "Collect rainwater for garden use.",
    "Water your garden in the early morning or late evening to reduce evaporation.",
    "Consider a dual-flush toilet.",
    "Don't use the toilet as a wastebasket.",
    "Thaw frozen food in the refrigerator instead of under running water.",
];

pub const PLASTIC_TIPS: &[&str] = &[
    "Carry a reusable water bottle and coffee cup.",
    "Always use reusable shopping bags.",
    "Choose products with minimal or no plastic packaging, especially fresh produce.",
    "Say no to plastic straws, cutlery, and takeout containers; bring your own reusable set.",
    "Support businesses that prioritize plastic reduction and sustainable packaging.",
    "Participate in local beach or park clean-up drives.",
    "Recycle plastic properly in your area, understanding local guidelines.",
    "Avoid single-use plastics wherever possible, including disposable razors and pens.",
    "Buy in bulk to reduce packaging waste.",
    "Consider making your own cleaning products to avoid plastic bottles.",
    "Repair items instead of replacing them, especially electronics and toys.",
    "Educate others on the importance of reducing plastic waste.",
];

/// Uniform pick from a fixed, non-empty tip list.
#[derive(Clone, Copy, Debug)]
pub struct TipSelector {
    tips: &'static [&'static str],
}

impl TipSelector {
    /// Panics on an empty list; every list above is a non-empty constant.
    pub fn new(tips: &'static [&'static str]) -> Self {
        assert!(!tips.is_empty(), "tip list must not be empty");
        Self { tips }
    }

    pub fn tips(&self) -> &'static [&'static str] {
        self.tips
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.tips[rng.gen_range(0..self.tips.len())]
    }
}
