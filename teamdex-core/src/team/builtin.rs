///! Built-in preset teams.
///!
///! Shipped read-only rosters. They carry fixed `default-*` ids, are never
///! persisted, never re-validated, and can never be deleted.

use crate::team::types::Team;

const GEN9_OU_STANDARD_CODE: &str = "\
Glimmora @ Focus Sash
Ability: Toxic Debris
Tera Type: Ghost
EVs: 252 SpA / 4 SpD / 252 Spe
Timid Nature
- Mortal Spin
- Stealth Rock
- Power Gem
- Earth Power

Great Tusk @ Booster Energy
Ability: Protosynthesis
Tera Type: Ground
EVs: 252 Atk / 4 SpD / 252 Spe
Jolly Nature
- Headlong Rush
- Close Combat
- Ice Spinner
- Rapid Spin

Kingambit @ Leftovers
Ability: Supreme Overlord
Tera Type: Dark
EVs: 252 Atk / 4 SpD / 252 Spe
Jolly Nature
- Kowtow Cleave
- Sucker Punch
- Iron Head
- Swords Dance

Dragonite @ Heavy-Duty Boots
Ability: Multiscale
Tera Type: Normal
EVs: 252 Atk / 4 SpD / 252 Spe
Adamant Nature
- Extreme Speed
- Dragon Dance
- Earthquake
- Roost

Gholdengo @ Choice Scarf
Ability: Good as Gold
Tera Type: Steel
EVs: 252 SpA / 4 SpD / 252 Spe
Timid Nature
- Make It Rain
- Shadow Ball
- Focus Blast
- Trick

Cinderace @ Heavy-Duty Boots
Ability: Libero
Tera Type: Fire
EVs: 252 Atk / 4 SpD / 252 Spe
Jolly Nature
- Pyro Ball
- U-turn
- Court Change
- Sucker Punch";

const RAIN_OFFENSE_CODE: &str = "\
Pelipper @ Damp Rock
Ability: Drizzle
Tera Type: Water
EVs: 248 HP / 252 Def / 8 SpD
Bold Nature
- Hurricane
- U-turn
- Roost
- Scald

Barraskewda @ Choice Band
Ability: Swift Swim
Tera Type: Water
EVs: 252 Atk / 4 SpD / 252 Spe
Adamant Nature
- Liquidation
- Close Combat
- Psychic Fangs
- Flip Turn

Zapdos @ Heavy-Duty Boots
Ability: Static
Tera Type: Electric
EVs: 252 SpA / 4 SpD / 252 Spe
Timid Nature
- Thunder
- Hurricane
- Volt Switch
- Roost

Ferrothorn @ Leftovers
Ability: Iron Barbs
Tera Type: Grass
EVs: 252 HP / 252 Def / 4 SpD
Impish Nature
- Spikes
- Leech Seed
- Knock Off
- Body Press

Thundurus-Therian @ Heavy-Duty Boots
Ability: Volt Absorb
Tera Type: Electric
EVs: 252 SpA / 4 SpD / 252 Spe
Timid Nature
- Nasty Plot
- Thunderbolt
- Focus Blast
- Grass Knot

Urshifu-Rapid-Strike @ Choice Band
Ability: Unseen Fist
Tera Type: Water
EVs: 252 Atk / 4 SpD / 252 Spe
Jolly Nature
- Surging Strikes
- Close Combat
- U-turn
- Aqua Jet";

/// The preset rosters, in display order.
pub fn builtin_teams() -> Vec<Team> {
    vec![
        Team {
            id: "default-1".to_string(),
            name: "Gen 9 OU Standard".to_string(),
            code: GEN9_OU_STANDARD_CODE.to_string(),
            instructions: "A solid offensive team with hazard control and a powerful late-game \
                           sweeper. Glimmora sets up hazards, Great Tusk provides removal and \
                           offense, and Kingambit cleans up late-game."
                .to_string(),
        },
        Team {
            id: "default-2".to_string(),
            name: "Rain Offense".to_string(),
            code: RAIN_OFFENSE_CODE.to_string(),
            instructions: "Set up rain with Pelipper and sweep with Barraskewda's Swift Swim. \
                           Zapdos provides powerful special attacks that benefit from rain \
                           (100% accurate Thunder)."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::parser::parse_export;

    #[test]
    fn test_builtin_teams_parse_to_full_rosters() {
        for team in builtin_teams() {
            let members = parse_export(&team.code);
            assert_eq!(members.len(), 6, "team '{}' should have 6 members", team.name);
            for member in &members {
                assert_ne!(member.item, "None");
                assert_ne!(member.ability, "Unknown");
                assert_eq!(member.moves.len(), 4);
            }
        }
    }

    #[test]
    fn test_builtin_ids_are_not_user_owned() {
        for team in builtin_teams() {
            assert!(team.id.starts_with("default-"));
        }
    }
}
