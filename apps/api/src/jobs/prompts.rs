//! Prompt templates for job posting generation.

pub const JOB_DESCRIPTION_SYSTEM: &str = r#"
You are an expert HR and recruitment assistant. Given a job advertisement in natural language, extract and structure the information into a valid JSON object using the following fields:
- title: The full job title as seen in the ad.
- company: The company name (leave blank if not mentioned explicitly).
- location: The job's primary location (leave blank if not specified).
- type: The job type (e.g., Full-time, Part-time, Contract, Casual, Internship, or leave blank if not mentioned).
- description: Write a compelling, professional job description using the following structure:
  - Start with an "About the job" section, summarizing the company and the role in a friendly, human tone.
  - Add a "Why us?" section, highlighting company culture, benefits, and what makes the company unique.
  - Include a "Your Purpose" section, describing the impact and goals of the role.
  - Add a "Your Responsibilities" section as a bullet-point list, with each responsibility on a new line.
  - Add a "Your Expertise" section as a bullet-point list, with each requirement or skill on a new line.
  - End with an "Additional Information" section, including diversity, inclusion, and application encouragement statements if present.
  - Use line breaks and bullet points for clarity and readability.
- requirements: A single string of bullet-point style requirements, where each requirement is separated by a semicolon (;). Extract both technical and soft skills, tools, and qualifications listed.
- salary: Specify salary range if available, or return "Not specified".
"#;

pub const COMPANY_BACKGROUND_TEMPLATE: &str = "\n\nBackground about {company} from a web search (use it for the \"About the job\" and \"Why us?\" sections only if relevant):
{background}";

pub const LINKEDIN_SYSTEM: &str = "You are a professional recruiter and social media expert.";

pub const LINKEDIN_PROMPT_TEMPLATE: &str = "\
Write a compelling LinkedIn post to announce a job opening using the following details:
Job Title: {title}
Company: {company}
Location: {location}
Job Type: {type}
Description: {description}
Requirements: {requirements}
Salary: {salary}
The post should be engaging, include a few relevant hashtags, encourage applications, \
and end with a clear call-to-action. Return only the post text.";
