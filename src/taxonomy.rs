use std::fmt;

/// One entry of the cost-code taxonomy: a 5-digit work-category code and
/// its label. The table below is the canonical vocabulary; order matters
/// because the classification prompt serializes it as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostCode {
    pub code: &'static str,
    pub label: &'static str,
}

impl fmt::Display for CostCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.label)
    }
}

pub const COST_CODES: &[CostCode] = &[
    CostCode { code: "00030", label: "Financing Fees" },
    CostCode { code: "00110", label: "Architectural Fees" },
    CostCode { code: "00150", label: "Engineering Fees" },
    CostCode { code: "00160", label: "Interior Design" },
    CostCode { code: "01020", label: "First Aid/safety/Inspect/Carp./Lab" },
    CostCode { code: "01025", label: "Safety Supplies" },
    CostCode { code: "01028", label: "Safety Audit" },
    CostCode { code: "01100", label: "Surveying" },
    CostCode { code: "01200", label: "Hydro/Gas/Telus Services" },
    CostCode { code: "01210", label: "Temp Hydro" },
    CostCode { code: "01220", label: "Temporary Heat" },
    CostCode { code: "01230", label: "Temporary Lighting & Security Lighting" },
    CostCode { code: "01240", label: "Temporary Water" },
    CostCode { code: "01250", label: "Temporary Fencing" },
    CostCode { code: "01400", label: "Tree Protection" },
    CostCode { code: "01520", label: "Sanitary Facilities" },
    CostCode { code: "01560", label: "Project Construction Signs" },
    CostCode { code: "01710", label: "Progressive Site Clean-up" },
    CostCode { code: "01720", label: "Final Clean-up" },
    CostCode { code: "01721", label: "Pressure Washing" },
    CostCode { code: "01750", label: "Disposal Bins/Fees" },
    CostCode { code: "01760", label: "Protect Finishes" },
    CostCode { code: "01810", label: "Hoist/ crane/Scaffold rental" },
    CostCode { code: "01820", label: "Winter Protection" },
    CostCode { code: "01900", label: "Cash Allowance" },
    CostCode { code: "02220", label: "Demolition" },
    CostCode { code: "02225", label: "Demolition (secondary)" },
    CostCode { code: "02270", label: "Erosion & Sediment Control" },
    CostCode { code: "02300", label: "Site Services (Fence)" },
    CostCode { code: "02310", label: "Finish Grading" },
    CostCode { code: "02315", label: "Excavation & Backfill" },
    CostCode { code: "02600", label: "Drainaige & Stormwater" },
    CostCode { code: "02621", label: "Foundation Drain Tile" },
    CostCode { code: "02700", label: "Exterior Hardscape" },
    CostCode { code: "02705", label: "Exterior Decking" },
    CostCode { code: "02773", label: "Curbs & Gutters & Sidewalk" },
    CostCode { code: "02820", label: "Fencing & Gates (Fnds, Stone & Alumn)" },
    CostCode { code: "02900", label: "Landscaping" },
    CostCode { code: "02910", label: "Irrigation Systems" },
    CostCode { code: "03050", label: "Concrete Material" },
    CostCode { code: "03100", label: "Formwork Material" },
    CostCode { code: "03150", label: "Foundation Labor (Form, Rebar, Hardware)" },
    CostCode { code: "03210", label: "Reinforcing Steel Material and Hardware" },
    CostCode { code: "03350", label: "Concrete Placing/Finishing" },
    CostCode { code: "03351", label: "Concrete Pumping" },
    CostCode { code: "03360", label: "Special Concrete Finishes" },
    CostCode { code: "03800", label: "Cutting & Coring" },
    CostCode { code: "04200", label: "Masonry" },
    CostCode { code: "04400", label: "Stone Veneer" },
    CostCode { code: "05090", label: "Exterior Railing and Guardrail" },
    CostCode { code: "05095", label: "Driveway Gates & Fencing" },
    CostCode { code: "05100", label: "Steel Beams" },
    CostCode { code: "05700", label: "Metal Chimney Cap" },
    CostCode { code: "05710", label: "Deck Flashing" },
    CostCode { code: "06060", label: "Framing Lumber" },
    CostCode { code: "06110", label: "Framing Labor/backframing Labor" },
    CostCode { code: "06175", label: "Wood Trusses" },
    CostCode { code: "06200", label: "Interior Finishing Material" },
    CostCode { code: "06220", label: "Finishing Labor" },
    CostCode { code: "06410", label: "Custom Cabinets" },
    CostCode { code: "06415", label: "Bath Vanity" },
    CostCode { code: "06420", label: "Stone/Countertop - Material" },
    CostCode { code: "06425", label: "Stone/Countertop - Fabrication" },
    CostCode { code: "06430", label: "Interior Railings" },
    CostCode { code: "06450", label: "Fireplace Mantels" },
    CostCode { code: "07200", label: "Interior Waterproofing/Shower pan" },
    CostCode { code: "07210", label: "Building Insulation" },
    CostCode { code: "07220", label: "Building Exterior Waterproofing/Vapour Barrier" },
    CostCode { code: "07311", label: "Roofing System" },
    CostCode { code: "07450", label: "Siding/Trims - Material" },
    CostCode { code: "07460", label: "Siding/Trims - Labor" },
    CostCode { code: "07465", label: "Stucco" },
    CostCode { code: "07500", label: "Torch & Decking" },
    CostCode { code: "07600", label: "Metal Roofing - Prepainted Aluminum" },
    CostCode { code: "07714", label: "Gutter & Downspouts" },
    CostCode { code: "07920", label: "Sealants & Caulking" },
    CostCode { code: "08210", label: "Interior Doors" },
    CostCode { code: "08215", label: "Exterior Doors" },
    CostCode { code: "08216", label: "Front/Entrance Door" },
    CostCode { code: "08220", label: "Closet Doors - Bifolds" },
    CostCode { code: "08360", label: "Garage Door" },
    CostCode { code: "08560", label: "Window Material" },
    CostCode { code: "08570", label: "Window Installation" },
    CostCode { code: "08580", label: "Window Waterproofing" },
    CostCode { code: "08600", label: "Skylights" },
    CostCode { code: "08700", label: "Cabinetry and finish hardware" },
    CostCode { code: "08800", label: "Door hardware" },
    CostCode { code: "09200", label: "Drywall Systems" },
    CostCode { code: "09300", label: "Exterior Tile Work- Material" },
    CostCode { code: "09310", label: "Exterior Tile Work- Installation" },
    CostCode { code: "09640", label: "Wood Flooring - Material" },
    CostCode { code: "09645", label: "Wood Flooring - Installation" },
    CostCode { code: "09650", label: "Interior Tile Work- Material" },
    CostCode { code: "09655", label: "Interior Tile Work - Installation" },
    CostCode { code: "09680", label: "Carpeting - Material" },
    CostCode { code: "09690", label: "Carpeting - Labor" },
    CostCode { code: "09900", label: "Painting Exterior" },
    CostCode { code: "09905", label: "Painting Interior" },
    CostCode { code: "09910", label: "Wallpaper Material" },
    CostCode { code: "09920", label: "Wallpaper Labor" },
    CostCode { code: "10810", label: "Residential Washroom Accessories" },
    CostCode { code: "10820", label: "Shower Enclosures" },
    CostCode { code: "10830", label: "Bathroom Mirrors" },
    CostCode { code: "10840", label: "Mirror and Glazing" },
    CostCode { code: "10850", label: "Wine Rack" },
    CostCode { code: "10900", label: "Closet Specialties" },
    CostCode { code: "11450", label: "Appliances" },
    CostCode { code: "11452", label: "Appliance Installation" },
    CostCode { code: "11455", label: "Built-in Vacuum" },
    CostCode { code: "11460", label: "Outdoor Kitchen BBQ & Sink" },
    CostCode { code: "12490", label: "Window Treatment" },
    CostCode { code: "12500", label: "Furniture" },
    CostCode { code: "13150", label: "Swimming Pools" },
    CostCode { code: "13160", label: "Generator" },
    CostCode { code: "13170", label: "Dry Sauna" },
    CostCode { code: "13180", label: "Hot Tubs" },
    CostCode { code: "15015", label: "Plumbing Rough in" },
    CostCode { code: "15300", label: "Fire Protection (Sprinklers)" },
    CostCode { code: "15410", label: "Plumbing Fixtures" },
    CostCode { code: "15500", label: "Radiant Heating" },
    CostCode { code: "15610", label: "Wine Cellar Cooling Unit" },
    CostCode { code: "15700", label: "Air Conditioning/HRV" },
    CostCode { code: "15750", label: "Fire Place Inserts" },
    CostCode { code: "16050", label: "General Electrical" },
    CostCode { code: "16100", label: "Solar System" },
    CostCode { code: "16500", label: "Fixtures" },
    CostCode { code: "16800", label: "Low Voltage (Security, Internet)" },
    CostCode { code: "16900", label: "Sound and Audio" },
];

/// Serialize the whole taxonomy as "CODE - Label" lines for the prompt.
pub fn mapping_text() -> String {
    let mut out = String::new();
    for cc in COST_CODES {
        out.push_str(&cc.to_string());
        out.push('\n');
    }
    out.pop();
    out
}

pub fn find(code: &str) -> Option<&'static CostCode> {
    COST_CODES.iter().find(|cc| cc.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_five_digits() {
        for cc in COST_CODES {
            assert_eq!(cc.code.len(), 5, "bad code: {}", cc.code);
            assert!(cc.code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_codes_are_unique_and_ordered() {
        for pair in COST_CODES.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("02900").unwrap().label, "Landscaping");
        assert_eq!(find("16900").unwrap().label, "Sound and Audio");
        assert!(find("99999").is_none());
    }

    #[test]
    fn test_mapping_text_lines() {
        let text = mapping_text();
        assert_eq!(text.lines().count(), COST_CODES.len());
        assert!(text.starts_with("00030 - Financing Fees"));
        assert!(text.ends_with("16900 - Sound and Audio"));
    }
}
