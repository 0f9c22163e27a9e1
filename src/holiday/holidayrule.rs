use serde::{
    Serialize,
    Deserialize
};

/// The four recognized rule kinds. A rule record carries its kind as a
/// plain tag string so that an unrecognized tag stays representable;
/// interpretation happens at resolve time.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum HolidayRuleType {
    Fixed,
    FixedMondayShifted,
    EasterRelative,
    EasterRelativeMondayShifted
}

impl HolidayRuleType {
    pub fn parse(tag: &str) -> Option<HolidayRuleType> {
        match tag {
            "Fixed" => Some(HolidayRuleType::Fixed),
            "FixedMondayShifted" => Some(HolidayRuleType::FixedMondayShifted),
            "EasterRelative" => Some(HolidayRuleType::EasterRelative),
            "EasterRelativeMondayShifted" => Some(HolidayRuleType::EasterRelativeMondayShifted),
            _ => None
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            HolidayRuleType::Fixed => "Fixed",
            HolidayRuleType::FixedMondayShifted => "FixedMondayShifted",
            HolidayRuleType::EasterRelative => "EasterRelative",
            HolidayRuleType::EasterRelativeMondayShifted => "EasterRelativeMondayShifted"
        }
    }
}

/// One holiday rule record as supplied by the rule store.
///
/// `month` and `day` are meaningful for the two fixed kinds,
/// `easter_offset_days` for the two Easter-relative kinds. The inactive
/// group is ignored, not validated.
#[derive(Clone, Serialize, Deserialize)]
pub struct HolidayRule {
    name: String,
    rule_type: String,
    #[serde(default)]
    month: u32,
    #[serde(default)]
    day: u32,
    #[serde(default)]
    easter_offset_days: i32
}

impl HolidayRule {
    pub fn new(name: &str,
               rule_type: &str,
               month: u32,
               day: u32,
               easter_offset_days: i32) -> HolidayRule {
        HolidayRule {
            name: name.to_owned(),
            rule_type: rule_type.to_owned(),
            month,
            day,
            easter_offset_days
        }
    }

    pub fn fixed(name: &str, month: u32, day: u32) -> HolidayRule {
        HolidayRule::new(name, HolidayRuleType::Fixed.tag(), month, day, 0)
    }

    pub fn fixed_monday_shifted(name: &str, month: u32, day: u32) -> HolidayRule {
        HolidayRule::new(name, HolidayRuleType::FixedMondayShifted.tag(), month, day, 0)
    }

    pub fn easter_relative(name: &str, easter_offset_days: i32) -> HolidayRule {
        HolidayRule::new(name, HolidayRuleType::EasterRelative.tag(), 0, 0, easter_offset_days)
    }

    pub fn easter_relative_monday_shifted(name: &str, easter_offset_days: i32) -> HolidayRule {
        HolidayRule::new(name, HolidayRuleType::EasterRelativeMondayShifted.tag(), 0, 0, easter_offset_days)
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn rule_type(&self) -> &String {
        &self.rule_type
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn easter_offset_days(&self) -> i32 {
        self.easter_offset_days
    }
}
