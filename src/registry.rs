//! Built-in content for the detail pages, keyed by slug.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    pub title: &'static str,
    pub summary: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseRecord {
    pub title: &'static str,
    pub summary: &'static str,
    pub meta: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryAction {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRecord {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub primary_action: PrimaryAction,
    pub copy_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Service(&'static ServiceRecord),
    Course(&'static CourseRecord),
    Doc(&'static DocRecord),
}

impl Record {
    pub fn title(&self) -> &'static str {
        match self {
            Record::Service(r) => r.title,
            Record::Course(r) => r.title,
            Record::Doc(r) => r.title,
        }
    }
}

fn find<T>(table: &'static [(&'static str, T)], slug: &str) -> Option<&'static T> {
    table.iter().find(|(s, _)| *s == slug).map(|(_, record)| record)
}

pub fn service(slug: &str) -> Option<&'static ServiceRecord> {
    find(SERVICES, slug)
}

pub fn course(slug: &str) -> Option<&'static CourseRecord> {
    find(COURSES, slug)
}

pub fn doc(slug: &str) -> Option<&'static DocRecord> {
    find(DOCS, slug)
}

pub static SERVICES: &[(&str, ServiceRecord)] = &[
    (
        "cloud-architecture",
        ServiceRecord {
            title: "Cloud Architecture & Modernization",
            summary: "Design and deploy secure landing zones, platform services, and guardrails tailored to your governance requirements.",
            bullets: &[
                "Blueprint landing zones across Azure, AWS, and GCP with repeatable automation.",
                "Implement identity, networking, and policy baselines aligned to zero-trust principles.",
                "Establish FinOps and monitoring practices to keep environments cost-effective and observable.",
            ],
        },
    ),
    (
        "network-cybersecurity",
        ServiceRecord {
            title: "Network & Cybersecurity Engineering",
            summary: "Integrate defense-in-depth controls, SOC workflows, and secure connectivity for distributed teams.",
            bullets: &[
                "Zero-trust access, SASE, and SD-WAN solutions for hybrid workforces.",
                "SOC design including SIEM, SOAR integrations, and incident runbooks.",
                "Regulatory alignment for PCI-DSS, NIST CSF, CIS, and industry frameworks.",
            ],
        },
    ),
    (
        "ai-automation",
        ServiceRecord {
            title: "AI & Automation Programs",
            summary: "Build copilots, automation pipelines, and ML workflows that shorten time-to-value.",
            bullets: &[
                "Discovery workshops to identify high-impact automation opportunities.",
                "Prototype copilots integrated with internal systems and governance guardrails.",
                "Model lifecycle operations covering prompt evaluation, monitoring, and retraining.",
            ],
        },
    ),
    (
        "enterprise-training",
        ServiceRecord {
            title: "Enterprise Training & Enablement",
            summary: "Role-based enablement experiences that accelerate adoption of new platforms and processes.",
            bullets: &[
                "Curriculum design for architects, operators, and leadership cohorts.",
                "Hands-on labs delivered onsite or virtually with real-world scenarios.",
                "Capability assessments and certification coaching aligned to business goals.",
            ],
        },
    ),
    (
        "managed-operations",
        ServiceRecord {
            title: "Managed Operations & Reliability",
            summary: "24/7 operational coverage with proactive engineering to keep business services resilient.",
            bullets: &[
                "Platform monitoring, alert tuning, and runbook automation.",
                "Incident response leadership with clear SLAs and communication templates.",
                "Continuous improvement loops including game days and post-incident reviews.",
            ],
        },
    ),
    (
        "fractional-cto",
        ServiceRecord {
            title: "Fractional CTO & Advisory",
            summary: "Interim technology leadership to align architecture, delivery, and roadmap decisions.",
            bullets: &[
                "Technology strategy, budgeting, and vendor management support.",
                "Operating model design spanning product, platform, and security teams.",
                "Executive-ready reporting to translate engineering outcomes into business insights.",
            ],
        },
    ),
];

pub static COURSES: &[(&str, CourseRecord)] = &[
    (
        "network-fundamentals",
        CourseRecord {
            title: "Network Fundamentals",
            summary: "Understand IP addressing, subnetting, and core topologies before moving into advanced design.",
            meta: "Domain: Networking • Format: Guided labs",
            bullets: &[
                "Plan IPv4/IPv6 addressing schemes with subnet calculators and validation labs.",
                "Design resilient LAN/WAN architectures using Packet Tracer and physical diagrams.",
                "Deploy DHCP and DNS services with repeatable, automation-ready configs.",
            ],
        },
    ),
    (
        "routing-switching",
        CourseRecord {
            title: "Routing & Switching",
            summary: "Level up Cisco CLI proficiency with multi-protocol routing labs and VLAN segmentation exercises.",
            meta: "Domain: Networking • Format: CLI deep dives",
            bullets: &[
                "Implement static routes, RIP, and OSPF across branch and data center gear.",
                "Configure VLAN trunking, EtherChannel, and spanning-tree protections.",
                "Troubleshoot Frame Relay, PPP, and DHCP relay using structured runbooks.",
            ],
        },
    ),
    (
        "virtual-networking",
        CourseRecord {
            title: "Virtual Networking",
            summary: "Blend virtual switches, bridges, and automation to unify on-prem and cloud workloads.",
            meta: "Domain: Networking • Format: Automation labs",
            bullets: &[
                "Deploy VMware and Proxmox vSwitches with tagged segments and overlays.",
                "Automate Netplan YAML and Bash scripts to provision lab networks at scale.",
                "Integrate cloud topologies with on-prem firewalls for hybrid lab scenarios.",
            ],
        },
    ),
    (
        "advanced-networking",
        CourseRecord {
            title: "Advanced Networking",
            summary: "Design multi-site architectures with IPv6, VPN, and load balancing for production-readiness.",
            meta: "Domain: Networking • Format: Architecture playbooks",
            bullets: &[
                "Execute IPv6 adoption plans with dual-stack validation suites.",
                "Engineer multi-site routing with dynamic failover and site-to-site VPNs.",
                "Analyze Siege & Filiale case studies to benchmark enterprise deployments.",
            ],
        },
    ),
    (
        "linux-administration",
        CourseRecord {
            title: "Linux Administration",
            summary: "Master daily operations, automation, and networking on Linux servers.",
            meta: "Domain: Operating Systems • Format: CLI + scripting",
            bullets: &[
                "Harden users, groups, and permissions with sudo and audit policies.",
                "Automate services and reporting with Bash, cron, and systemd timers.",
                "Configure Netplan and systemd-networkd for reliable network stacks.",
            ],
        },
    ),
    (
        "windows-server-management",
        CourseRecord {
            title: "Windows Server Management",
            summary: "Operate Active Directory, DNS, and file services with production-grade procedures.",
            meta: "Domain: Operating Systems • Format: GUI + PowerShell labs",
            bullets: &[
                "Deploy AD DS, Group Policy, and DNS-integrated zones.",
                "Deliver DHCP, IIS, and SMB file services with high availability.",
                "Script routine administration with PowerShell remoting and modules.",
            ],
        },
    ),
    (
        "virtualization-deployment",
        CourseRecord {
            title: "Virtualization & Deployment",
            summary: "Provision repeatable lab and production clusters across VMware and Proxmox.",
            meta: "Domain: Operating Systems • Format: Platform integrations",
            bullets: &[
                "Configure compute, storage, and networking for mixed hypervisor estates.",
                "Automate snapshots, backups, and template rollouts.",
                "Integrate pfSense edges and Active Directory services for hybrid labs.",
            ],
        },
    ),
    (
        "cybersecurity-essentials",
        CourseRecord {
            title: "Cybersecurity Essentials",
            summary: "Build defensive muscle memory with policy, tooling, and monitoring workflows.",
            meta: "Domain: Security • Format: Defensive labs",
            bullets: &[
                "Map threat models using the CIA triad and risk scoring matrices.",
                "Deploy Snort and Suricata sensors with actionable alerting.",
                "Author security policies, RBAC, and entitlement reviews.",
            ],
        },
    ),
    (
        "ethical-hacking",
        CourseRecord {
            title: "Penetration Testing & Ethical Hacking",
            summary: "Execute controlled offensive operations with modern open-source tooling.",
            meta: "Domain: Security • Format: Offensive labs",
            bullets: &[
                "Enumerate networks with Nmap, Hydra, and advanced scanning profiles.",
                "Exploit vulnerabilities using Metasploit frameworks and manual techniques.",
                "Compete in CTF-style exercises with debrief templates for stakeholders.",
            ],
        },
    ),
    (
        "network-security-defense",
        CourseRecord {
            title: "Network Security & Defense",
            summary: "Defend edge networks with layered routing, firewall, and IDS strategies.",
            meta: "Domain: Security • Format: Blue-team runbooks",
            bullets: &[
                "Design VPNs, ACLs, and DDoS protections aligned to business SLAs.",
                "Build pfSense firewall policies with automation hooks and alerting.",
                "Operationalize IDS telemetry and dashboards for rapid response.",
            ],
        },
    ),
    (
        "cloud-compliance",
        CourseRecord {
            title: "Cloud & Compliance",
            summary: "Align Azure security controls with governance frameworks and audit preparation.",
            meta: "Domain: Security • Format: Governance toolkits",
            bullets: &[
                "Implement RBAC and IAM guardrails following shared responsibility models.",
                "Map workloads to GRC requirements across SOC 2, ISO 27001, and CIS benchmarks.",
                "Generate evidence packs and workflows for ongoing compliance operations.",
            ],
        },
    ),
];

pub static DOCS: &[(&str, DocRecord)] = &[
    (
        "azure-landing-zone",
        DocRecord {
            title: "Azure Landing Zone Blueprint",
            summary: "Comprehensive reference covering design decisions, Bicep modules, and policy assignments.",
            tags: &["Azure", "IaC", "Governance"],
            bullets: &[
                "Architecture diagrams and decision matrix for hub-spoke vs. virtual WAN.",
                "Modular Bicep templates for subscriptions, networking, and security controls.",
                "Operational guidance for monitoring, backup, and cost governance.",
            ],
            primary_action: PrimaryAction {
                label: "Download blueprint",
                url: "files/azure-landing-zone-blueprint.zip",
            },
            copy_url: "https://dexterity.it/docs/azure-landing-zone",
        },
    ),
    (
        "zero-trust-playbook",
        DocRecord {
            title: "Zero Trust Incident Playbook",
            summary: "Runbook for threat detection, triage, and containment in zero-trust environments.",
            tags: &["Security", "Incident Response", "Zero Trust"],
            bullets: &[
                "Incident classification criteria and escalation matrix.",
                "Containment workflows for identities, endpoints, and network segments.",
                "Post-incident review checklist and lessons learned template.",
            ],
            primary_action: PrimaryAction {
                label: "View playbook",
                url: "files/zero-trust-playbook.pdf",
            },
            copy_url: "https://dexterity.it/docs/zero-trust-playbook",
        },
    ),
    (
        "copilot-adoption",
        DocRecord {
            title: "Copilot Adoption Guide",
            summary: "Structured approach to launching copilots safely across the organization.",
            tags: &["AI", "Change Management", "Copilot"],
            bullets: &[
                "Stakeholder mapping and communication plan for pilot cohorts.",
                "Guardrail design including data loss prevention and responsible AI principles.",
                "Metrics and feedback loops to scale adoption confidently.",
            ],
            primary_action: PrimaryAction {
                label: "Open guide",
                url: "files/copilot-adoption-guide.pdf",
            },
            copy_url: "https://dexterity.it/docs/copilot-adoption",
        },
    ),
    (
        "sre-runbook",
        DocRecord {
            title: "SRE On-Call Runbook",
            summary: "Operational handbook for on-call engineers supporting critical services.",
            tags: &["Operations", "SRE", "Observability"],
            bullets: &[
                "Triage decision trees and communication templates.",
                "Golden signals dashboard definitions and alert routing.",
                "Blameless post-incident process with sample report outline.",
            ],
            primary_action: PrimaryAction {
                label: "Download runbook",
                url: "files/sre-oncall-runbook.pdf",
            },
            copy_url: "https://dexterity.it/docs/sre-runbook",
        },
    ),
    (
        "network-fundamentals",
        DocRecord {
            title: "Network Fundamentals Lab Guide",
            summary: "Hands-on workbook covering IP design, subnetting drills, and LAN/WAN build guides.",
            tags: &["Networking", "Foundations", "Labs"],
            bullets: &[
                "Step-by-step subnetting challenges with answer keys.",
                "Packet Tracer topologies for LAN, WAN, DHCP, and DNS services.",
                "Wireshark captures annotated for protocol deep dives.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/network-fundamentals",
            },
            copy_url: "https://dexterity.it/docs/network-fundamentals",
        },
    ),
    (
        "routing-switching",
        DocRecord {
            title: "Routing & Switching Playbook",
            summary: "Cisco-centric labs exploring core routing protocols, VLAN segmentation, and troubleshooting.",
            tags: &["Networking", "Cisco", "Routing"],
            bullets: &[
                "Configuration snippets for static, RIP, and OSPF rollouts.",
                "VLAN trunking, EtherChannel, and spanning tree hardening guides.",
                "CLI troubleshooting checklists and common fault isolation patterns.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/routing-switching",
            },
            copy_url: "https://dexterity.it/docs/routing-switching",
        },
    ),
    (
        "ccna-configuration",
        DocRecord {
            title: "CCNA Configuration Lab Pack",
            summary: "Hands-on labs covering Layer 2/3 Cisco IOS setups, verification commands, and Packet Tracer topologies.",
            tags: &["Networking", "Cisco", "CCNA"],
            bullets: &[
                "Step-by-step switch and router base configuration with hostname, VLAN, and interface templates.",
                "Routing scenarios for static routes, OSPF, and inter-VLAN gateways with validation commands.",
                "Packet Tracer topology walkthroughs plus troubleshooting checklists for common misconfigurations.",
            ],
            primary_action: PrimaryAction {
                label: "Open HTML guide",
                url: "files/ccna-configuration-guide.html",
            },
            copy_url: "https://dexterity.it/docs/ccna-configuration",
        },
    ),
    (
        "frame-relay-lab",
        DocRecord {
            title: "Frame Relay Configuration Lab",
            summary: "Deploy a hub-and-spoke Frame Relay WAN, map DLCIs, and validate reachability between spokes.",
            tags: &["Networking", "WAN", "Labs"],
            bullets: &[
                "Establish Frame Relay encapsulation with the correct LMI type and verify PVC status.",
                "Map static and dynamic DLCIs to router subinterfaces and confirm adjacency formation.",
                "Capture verification commands for routing convergence plus a troubleshooting checklist for common errors.",
            ],
            primary_action: PrimaryAction {
                label: "View Notion lab",
                url: "https://www.notion.so/Frame-Relay-config-29b3c102a17980908808e04806ec344a?source=copy_link",
            },
            copy_url: "https://www.notion.so/Frame-Relay-config-29b3c102a17980908808e04806ec344a?source=copy_link",
        },
    ),
    (
        "virtual-networking",
        DocRecord {
            title: "Virtual Networking Workbook",
            summary: "Blueprints for VMware, Proxmox, and cloud network integrations with automation hooks.",
            tags: &["Networking", "Virtualization", "Automation"],
            bullets: &[
                "vSwitch, bridge, and overlay templates for mixed hypervisor estates.",
                "Netplan YAML samples and Bash automation scripts.",
                "Hybrid cloud interconnect diagrams with pfSense integrations.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/virtual-networking",
            },
            copy_url: "https://dexterity.it/docs/virtual-networking",
        },
    ),
    (
        "advanced-networking",
        DocRecord {
            title: "Advanced Networking Case Files",
            summary: "Deep dives into IPv6, multi-site routing, VPN, and load-balancing architectures.",
            tags: &["Networking", "Enterprise", "IPv6"],
            bullets: &[
                "Dual-stack migration plan with validation workloads.",
                "Multi-site VPN designs referencing Siege & Filiale projects.",
                "Load-balancing topologies with health-check automation.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/advanced-networking",
            },
            copy_url: "https://dexterity.it/docs/advanced-networking",
        },
    ),
    (
        "linux-administration",
        DocRecord {
            title: "Linux Administration Field Guide",
            summary: "Operational checklists, scripts, and diagrams for administering Linux fleets.",
            tags: &["Linux", "Automation", "Ops"],
            bullets: &[
                "User, group, and sudo policy templates with audit notes.",
                "Bash automation snippets for backups, logging, and service health.",
                "Netplan and systemd-networkd profiles for multi-NIC hosts.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/linux-administration",
            },
            copy_url: "https://dexterity.it/docs/linux-administration",
        },
    ),
    (
        "windows-server-management",
        DocRecord {
            title: "Windows Server Management Runbook",
            summary: "End-to-end guides for Active Directory, DNS, DHCP, IIS, and automation tasks.",
            tags: &["Windows", "Active Directory", "PowerShell"],
            bullets: &[
                "Forest deployment checklist with Group Policy baselines.",
                "PowerShell modules for DHCP, DNS, and IIS administration.",
                "File services hardening, SMB shares, and audit policy scripts.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/windows-server-management",
            },
            copy_url: "https://dexterity.it/docs/windows-server-management",
        },
    ),
    (
        "virtualization-deployment",
        DocRecord {
            title: "Virtualization & Deployment Playbook",
            summary: "VMware and Proxmox reference architectures with backup and automation workflows.",
            tags: &["Virtualization", "VMware", "Proxmox"],
            bullets: &[
                "Cluster sizing calculators for compute, memory, and storage.",
                "Automation scripts for template deployment and snapshot management.",
                "Integration patterns with pfSense and Active Directory services.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/virtualization-deployment",
            },
            copy_url: "https://dexterity.it/docs/virtualization-deployment",
        },
    ),
    (
        "cybersecurity-essentials",
        DocRecord {
            title: "Cybersecurity Essentials Handbook",
            summary: "Defensive frameworks, worksheets, and IDS deployment guides.",
            tags: &["Security", "Defensive", "Governance"],
            bullets: &[
                "Threat modeling templates mapped to the CIA triad.",
                "Snort and Suricata deployment with alert tuning labs.",
                "Policy starter kits for RBAC, least privilege, and access reviews.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/cybersecurity-essentials",
            },
            copy_url: "https://dexterity.it/docs/cybersecurity-essentials",
        },
    ),
    (
        "ethical-hacking",
        DocRecord {
            title: "Penetration Testing & Ethical Hacking Labs",
            summary: "Offensive security methodologies, tooling cheat-sheets, and CTF exercises.",
            tags: &["Security", "Offensive", "Labs"],
            bullets: &[
                "Reconnaissance and enumeration workflows with Nmap and Hydra.",
                "Metasploit exploitation playbooks with post-exploitation steps.",
                "Capture the Flag lab scenarios with scoring and write-ups.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/ethical-hacking",
            },
            copy_url: "https://dexterity.it/docs/ethical-hacking",
        },
    ),
    (
        "network-security-defense",
        DocRecord {
            title: "Network Security & Defense Runbook",
            summary: "Firewall, VPN, and IDS operations guide for blue-team practitioners.",
            tags: &["Security", "Networking", "Blue Team"],
            bullets: &[
                "ACL and VPN design templates for branch and remote access.",
                "pfSense automation scripts and monitoring dashboards.",
                "Incident response checklists for edge attacks and DoS events.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/network-security-defense",
            },
            copy_url: "https://dexterity.it/docs/network-security-defense",
        },
    ),
    (
        "cloud-compliance",
        DocRecord {
            title: "Cloud & Compliance Toolkit",
            summary: "Azure security configurations mapped to compliance frameworks and audit evidence packs.",
            tags: &["Security", "Compliance", "Azure"],
            bullets: &[
                "RBAC and IAM configuration patterns aligned to shared responsibility.",
                "Controls mapping for SOC 2, ISO 27001, CIS, and AZ-900 objectives.",
                "Evidence collection worksheets for ongoing compliance operations.",
            ],
            primary_action: PrimaryAction {
                label: "Open Notion workspace",
                url: "https://notion.so/dexterity-it/cloud-compliance",
            },
            copy_url: "https://dexterity.it/docs/cloud-compliance",
        },
    ),
];
