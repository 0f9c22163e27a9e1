use crate::holiday::holidayrule::HolidayRule;

/// The Colombian statutory holiday calendar, as rule records.
///
/// Six fixed civil and religious dates, seven Ley Emiliani dates moved
/// to the next Monday, Holy Thursday and Good Friday at fixed distances
/// before Easter Sunday, and three feasts counted from Easter Sunday and
/// then moved to the next Monday.
pub fn colombia() -> Vec<HolidayRule> {
    vec![
        HolidayRule::fixed("Año Nuevo", 1, 1),
        HolidayRule::fixed_monday_shifted("Día de los Reyes Magos", 1, 6),
        HolidayRule::fixed_monday_shifted("Día de San José", 3, 19),
        HolidayRule::easter_relative("Jueves Santo", -3),
        HolidayRule::easter_relative("Viernes Santo", -2),
        HolidayRule::fixed("Día del Trabajo", 5, 1),
        HolidayRule::easter_relative_monday_shifted("Ascensión del Señor", 39),
        HolidayRule::easter_relative_monday_shifted("Corpus Christi", 60),
        HolidayRule::easter_relative_monday_shifted("Sagrado Corazón de Jesús", 68),
        HolidayRule::fixed_monday_shifted("San Pedro y San Pablo", 6, 29),
        HolidayRule::fixed("Día de la Independencia", 7, 20),
        HolidayRule::fixed("Batalla de Boyacá", 8, 7),
        HolidayRule::fixed_monday_shifted("Asunción de la Virgen", 8, 15),
        HolidayRule::fixed_monday_shifted("Día de la Raza", 10, 12),
        HolidayRule::fixed_monday_shifted("Todos los Santos", 11, 1),
        HolidayRule::fixed_monday_shifted("Independencia de Cartagena", 11, 11),
        HolidayRule::fixed("Inmaculada Concepción", 12, 8),
        HolidayRule::fixed("Navidad", 12, 25)
    ]
}
