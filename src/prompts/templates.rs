pub const FALLBACK_SUBJECT: &str = "engineering structure or building from the technical blueprint";

pub const TASK_HEADER: &str =
    "TASK: Generate a 3D architectural/engineering visualization from the provided technical drawing.";

pub const CONSISTENCY_REQUIREMENT: &str = "CRITICAL CONSISTENCY REQUIREMENT:
- The 3D model MUST represent the EXACT SAME structure shown in the reference image
- Maintain the same architectural elements, proportions, and design features across all views
- Do NOT change the building type, structure, or overall design
- Only the camera angle should change, the subject remains identical";

pub const TECHNICAL_SPECIFICATIONS: &str = "TECHNICAL SPECIFICATIONS:
1. Accuracy: Convert 2D blueprint to 3D while preserving exact proportions and dimensions
2. Detail Level: Include all structural elements visible in the source drawing
3. Spatial Relationships: Maintain correct relative positions and alignments
4. Clean Output: White or neutral background, focus on the structure
5. Professional Quality: High resolution suitable for engineering presentation
6. Material Consistency: Use appropriate materials based on the building type (concrete, steel, glass, etc.)";

pub const TOP_VIEW_CONSTRAINT: &str = "SPECIAL CONSTRAINT FOR TOP VIEW:
- Camera must be EXACTLY perpendicular to the ground plane
- Zero tilt, zero rotation from vertical axis
- Show roof plan or ceiling layout as primary element
- Use orthographic projection (NO perspective distortion)
- Do NOT show any side walls or front facade";

pub const ORTHOGRAPHIC_VIEW_CONSTRAINT: &str = "SPECIAL CONSTRAINT FOR ORTHOGRAPHIC VIEW:
- Use parallel projection (NO vanishing points)
- All vertical lines remain vertical
- All horizontal lines remain horizontal
- No perspective distortion or depth compression
- Show elevation drawing style";

pub const PERSPECTIVE_VIEW_CONSTRAINT: &str = "SPECIAL CONSTRAINT FOR PERSPECTIVE VIEW:
- Use 3-point perspective for realistic depth
- Position camera to show primary facade plus one or two additional sides
- Include realistic depth cues with appropriate foreshortening";

pub const OUTPUT_INSTRUCTION: &str =
    "OUTPUT: Generate ONE clear, professional-quality 3D visualization following ALL requirements above.";
