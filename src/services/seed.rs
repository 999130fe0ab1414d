use crate::models::{Difficulty, FaceShape, Maintenance, NewStyle, StyleCategory};

use FaceShape::{Diamond, Heart, Oblong, Oval, Round, Square};
use StyleCategory::{BeardStyle, Hairstyle};

fn style(
    name: &str,
    description: &str,
    image_url: &str,
    category: StyleCategory,
    shapes: &[FaceShape],
    difficulty: Difficulty,
    maintenance: Maintenance,
) -> NewStyle {
    NewStyle {
        name: name.to_string(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        category,
        suited_face_shapes: shapes.to_vec(),
        difficulty,
        maintenance,
    }
}

/// Sample catalog loaded by the seeding tool: eight hairstyles followed by
/// eight beard styles
pub fn sample_styles() -> Vec<NewStyle> {
    vec![
        // Hairstyles
        style(
            "Classic Pompadour",
            "A timeless style that adds height and volume, perfect for creating a strong, confident look. The swept-back style works well with most face shapes and can be styled formally or casually.",
            "https://images.unsplash.com/photo-1503951914875-452162b0f3f1?w=400&h=400&fit=crop",
            Hairstyle,
            &[Oval, Square, Heart],
            Difficulty::Medium,
            Maintenance::High,
        ),
        style(
            "Textured Crop",
            "A modern, low-maintenance cut that adds texture and movement. Perfect for active lifestyles and works well with most face shapes.",
            "https://images.unsplash.com/photo-1580618672591-eb180b1a973f?w=400&h=400&fit=crop",
            Hairstyle,
            &[Oval, Round, Square, Heart, Oblong, Diamond],
            Difficulty::Easy,
            Maintenance::Low,
        ),
        style(
            "Side Part",
            "A classic, professional look that's versatile and timeless. The side part adds structure and can be styled in various ways.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
            Hairstyle,
            &[Oval, Square, Heart, Diamond],
            Difficulty::Easy,
            Maintenance::Medium,
        ),
        style(
            "Quiff",
            "A bold, voluminous style that creates height and adds personality. Perfect for those who want to make a statement.",
            "https://images.unsplash.com/photo-1492106087820-71f1a00d2b11?w=400&h=400&fit=crop",
            Hairstyle,
            &[Oval, Square, Heart],
            Difficulty::Medium,
            Maintenance::High,
        ),
        style(
            "Buzz Cut",
            "A clean, minimal cut that's extremely low maintenance. Perfect for those who prefer simplicity and functionality.",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
            Hairstyle,
            &[Oval, Square, Round, Heart, Oblong, Diamond],
            Difficulty::Easy,
            Maintenance::Low,
        ),
        style(
            "Slick Back",
            "A sophisticated, polished look that's perfect for formal occasions. Creates a sleek, professional appearance.",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop",
            Hairstyle,
            &[Oval, Square, Heart],
            Difficulty::Medium,
            Maintenance::Medium,
        ),
        style(
            "Messy Top",
            "A casual, textured style that's perfect for everyday wear. Easy to maintain and gives a relaxed, approachable look.",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop",
            Hairstyle,
            &[Oval, Round, Square, Heart, Oblong, Diamond],
            Difficulty::Easy,
            Maintenance::Low,
        ),
        style(
            "Fade",
            "A modern cut that transitions from short to long, creating a clean, sharp look. Very versatile and popular.",
            "https://images.unsplash.com/photo-1580618672591-eb180b1a973f?w=400&h=400&fit=crop",
            Hairstyle,
            &[Oval, Round, Square, Heart, Oblong, Diamond],
            Difficulty::Medium,
            Maintenance::Medium,
        ),
        // Beard styles
        style(
            "Full Beard",
            "A classic, masculine look that adds character and can help balance longer face shapes. Requires regular grooming and maintenance.",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop",
            BeardStyle,
            &[Oval, Round, Heart],
            Difficulty::Medium,
            Maintenance::High,
        ),
        style(
            "Stubble",
            "A low-maintenance style that adds definition without being overwhelming. Perfect for those who want a rugged look with minimal effort.",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
            BeardStyle,
            &[Oval, Square, Round, Heart, Oblong, Diamond],
            Difficulty::Easy,
            Maintenance::Low,
        ),
        style(
            "Goatee",
            "A focused style that draws attention to the chin area. Great for adding definition and can help balance various face shapes.",
            "https://images.unsplash.com/photo-1503951914875-452162b0f3f1?w=400&h=400&fit=crop",
            BeardStyle,
            &[Oval, Square, Heart, Diamond],
            Difficulty::Medium,
            Maintenance::Medium,
        ),
        style(
            "Van Dyke",
            "A sophisticated style combining a mustache and goatee. Perfect for those who want a distinguished, artistic look.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
            BeardStyle,
            &[Oval, Square, Heart, Diamond],
            Difficulty::Hard,
            Maintenance::High,
        ),
        style(
            "Chin Strap",
            "A thin line of beard that follows the jawline. Great for adding definition and can help create the illusion of a stronger jaw.",
            "https://images.unsplash.com/photo-1580618672591-eb180b1a973f?w=400&h=400&fit=crop",
            BeardStyle,
            &[Oval, Square, Heart],
            Difficulty::Medium,
            Maintenance::Medium,
        ),
        style(
            "Clean Shaven",
            "A timeless, professional look that's always in style. Perfect for those who prefer a clean, polished appearance.",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
            BeardStyle,
            &[Oval, Square, Round, Heart, Oblong, Diamond],
            Difficulty::Easy,
            Maintenance::Low,
        ),
        style(
            "Bandholz",
            "A natural, untrimmed beard that grows freely. Perfect for those who embrace a wild, natural look.",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
            BeardStyle,
            &[Oval, Round, Heart],
            Difficulty::Easy,
            Maintenance::Low,
        ),
        style(
            "Corporate Beard",
            "A well-groomed, professional beard that's trimmed and shaped. Perfect for business environments while maintaining character.",
            "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop",
            BeardStyle,
            &[Oval, Square, Heart, Diamond],
            Difficulty::Medium,
            Maintenance::High,
        ),
    ]
}
