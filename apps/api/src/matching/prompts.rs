//! Prompt templates for candidate matching.

pub const SCORING_PROMPT_TEMPLATE: &str = "\
You are an expert technical recruiter. Given the following job description and requirements:

Job Description: {description}
Requirements: {requirements}

And the following candidate profile:
Name: {name}
Email: {email}
Skills: {skills}
Experience: {experience}
Education: {education}

Score this candidate from 1-10 for fit to the job, and explain your reasoning in 2-3 sentences.
Return your answer in the format: SCORE: <number> | REASON: <reason>";

pub const SEARCH_SYSTEM: &str = "You are an AI recruiter.";

pub const SEARCH_PROMPT_TEMPLATE: &str = "\
Given the following job search prompt: \"{prompt}\", and the following candidate profiles:
{candidates_json}

Rank and return the best matching candidates as a JSON array, best match first. \
For each candidate, include:
- id
- first_name
- email
- skills
- match_score (0-100)
- reason (1-2 sentences why this candidate matches the prompt)
Return only the JSON array, no extra text.";
