///! Showdown-style export text parser.
///!
///! Turns a pasted multi-line export block into structured roster members.
///! Best-effort by design: malformed input degrades to sentinel values
///! ("None"/"Unknown"/no moves), it never fails. Whether the result is a
///! usable team (1–6 members) is the caller's call, not the parser's.

use crate::team::types::TeamMember;

const ITEM_DELIMITER: &str = " @ ";
const ABILITY_PREFIX: &str = "Ability:";
const MOVE_PREFIX: &str = "- ";

/// Parse export text into one [`TeamMember`] per blank-line-separated block.
/// Empty (or whitespace-only) input yields an empty vec.
///
/// Unrecognized lines inside a block (EVs, nature, Tera type, ...) are
/// ignored rather than modeled.
pub fn parse_export(code: &str) -> Vec<TeamMember> {
    blocks(code).into_iter().map(parse_block).collect()
}

/// Lightweight variant for previews and cards: only the species name from
/// each block's first line.
pub fn parse_names(code: &str) -> Vec<String> {
    blocks(code)
        .into_iter()
        .map(|block| {
            let name_line = block.lines().next().unwrap_or("");
            split_name_line(name_line).0
        })
        .collect()
}

/// Canonical lookup/cache key for a species name: lowercase, spaces to
/// hyphens, everything outside `[a-z0-9-]` stripped. The original-case name
/// is what gets displayed; this form is only for remote lookups.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Blank-line-separated blocks of the trimmed input. Trimming first keeps a
/// leading or trailing blank line from producing a spurious empty member.
fn blocks(code: &str) -> Vec<&str> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split("\n\n").collect()
}

/// Split a name line on the first ` @ `. A line with no delimiter is all
/// name, item "None". If the item text itself contains ` @ `, only the
/// segment up to the next delimiter is kept (matches the site's behavior).
fn split_name_line(name_line: &str) -> (String, Option<String>) {
    let mut parts = name_line.split(ITEM_DELIMITER);
    let name = parts.next().unwrap_or("").trim().to_string();
    let item = parts.next().map(|s| s.trim().to_string());
    (name, item)
}

fn parse_block(block: &str) -> TeamMember {
    let mut lines = block.lines();
    let name_line = lines.next().unwrap_or("");
    let (name, item) = split_name_line(name_line);

    let mut ability = None;
    let mut moves = Vec::new();
    for line in lines {
        if ability.is_none() {
            if let Some(rest) = line.strip_prefix(ABILITY_PREFIX) {
                ability = Some(rest.trim().to_string());
                continue;
            }
        }
        if let Some(rest) = line.strip_prefix(MOVE_PREFIX) {
            moves.push(rest.trim().to_string());
        }
    }

    TeamMember {
        name,
        item: item.unwrap_or_else(|| "None".to_string()),
        ability: ability.unwrap_or_else(|| "Unknown".to_string()),
        moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_block() {
        let members =
            parse_export("Pikachu @ Light Ball\nAbility: Static\n- Thunderbolt\n- Quick Attack");
        assert_eq!(members.len(), 1);
        let m = &members[0];
        assert_eq!(m.name, "Pikachu");
        assert_eq!(m.item, "Light Ball");
        assert_eq!(m.ability, "Static");
        assert_eq!(m.moves, vec!["Thunderbolt", "Quick Attack"]);
    }

    #[test]
    fn test_parse_bare_block_uses_sentinels() {
        let members = parse_export("Ditto\n- Transform");
        assert_eq!(members.len(), 1);
        let m = &members[0];
        assert_eq!(m.name, "Ditto");
        assert_eq!(m.item, "None");
        assert_eq!(m.ability, "Unknown");
        assert_eq!(m.moves, vec!["Transform"]);
    }

    #[test]
    fn test_empty_input_yields_no_members() {
        assert!(parse_export("").is_empty());
        assert!(parse_export("   \n\n  ").is_empty());
        assert!(parse_names("").is_empty());
    }

    #[test]
    fn test_member_count_matches_block_count() {
        let code = "Pelipper @ Damp Rock\nAbility: Drizzle\n- Hurricane\n\n\
                    Barraskewda @ Choice Band\nAbility: Swift Swim\n- Liquidation";
        assert_eq!(parse_export(code).len(), 2);
        assert_eq!(parse_names(code), vec!["Pelipper", "Barraskewda"]);
    }

    #[test]
    fn test_leading_and_trailing_blank_lines_ignored() {
        let members = parse_export("\n\nSnorlax @ Leftovers\n- Rest\n\n");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "Snorlax");
    }

    #[test]
    fn test_unrecognized_lines_ignored() {
        let members = parse_export(
            "Kingambit @ Leftovers\nAbility: Supreme Overlord\nTera Type: Dark\n\
             EVs: 252 Atk / 4 SpD / 252 Spe\nJolly Nature\n- Kowtow Cleave\n- Sucker Punch",
        );
        let m = &members[0];
        assert_eq!(m.ability, "Supreme Overlord");
        assert_eq!(m.moves, vec!["Kowtow Cleave", "Sucker Punch"]);
    }

    #[test]
    fn test_item_with_second_delimiter_keeps_first_segment() {
        // " @ " inside the item text: only the segment before the next
        // delimiter survives, like the original split.
        let members = parse_export("Pikachu @ Light @ Ball");
        assert_eq!(members[0].name, "Pikachu");
        assert_eq!(members[0].item, "Light");
    }

    #[test]
    fn test_move_order_preserved() {
        let members = parse_export("Dragonite\n- Extreme Speed\n- Dragon Dance\n- Earthquake\n- Roost");
        assert_eq!(
            members[0].moves,
            vec!["Extreme Speed", "Dragon Dance", "Earthquake", "Roost"]
        );
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Pikachu"), "pikachu");
        assert_eq!(normalize_name("Mr. Mime"), "mr-mime");
        assert_eq!(normalize_name("Nidoran♀"), "nidoran");
        assert_eq!(normalize_name("Urshifu-Rapid-Strike"), "urshifu-rapid-strike");
        assert_eq!(normalize_name("Great Tusk"), "great-tusk");
    }
}
